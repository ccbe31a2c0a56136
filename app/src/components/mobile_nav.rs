//! Slide-out navigation panel for screens narrower than `lg`.

use icondata::{BsChevronDown, BsList, BsQuestionCircle, BsSearch};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::{
    components::{icons, styles},
    navigation::{NavigationCatalog, NavigationItem, is_active, is_current},
};

pub fn component(
    catalog: Signal<&'static NavigationCatalog>,
    pathname: Signal<String>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="flex items-center h-12 lg:hidden">
            <button
                type="button"
                class="flex justify-center items-center rounded-md size-8 hover:bg-neutral-100 dark:hover:bg-neutral-800"
                aria-label="Open navigation menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|open| *open = !*open)
            >
                {icons::glyph(BsList, "size-4")}
            </button>

            <div class="flex items-center ml-4 space-x-4 text-gray-500">
                {icons::glyph(BsSearch, "size-4")}
                {icons::glyph(BsQuestionCircle, "size-4")}
            </div>

            <Show when=move || open.get()>
                <div class="fixed inset-0 z-40 bg-black/40" on:click=move |_| open.set(false)></div>
                <aside
                    class="flex fixed inset-y-0 left-0 z-50 flex-col w-64 h-full bg-white shadow-lg dark:bg-gray-900"
                    on:click=move |_| open.set(false)
                >
                    <h2 class="sr-only">"Navigation Menu"</h2>
                    <div class="flex flex-col p-4 space-y-2 text-left">
                        <span class="text-lg font-bold text-[#2B5398] dark:text-white">"✓"</span>
                        <div class="text-xs font-medium text-gray-500">"Personal Task & Habit Tracker"</div>
                    </div>
                    <div class="flex flex-col flex-1 p-4 space-y-2 text-sm">
                        {move || {
                            catalog
                                .get()
                                .main
                                .iter()
                                .map(|item| entry(item, pathname))
                                .collect_view()
                        }}
                    </div>
                </aside>
            </Show>
        </div>
    }
}

fn entry(item: &'static NavigationItem, pathname: Signal<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col space-y-1">
            <A
                href=item.landing_href()
                attr:class=move || styles::mobile_entry_class(pathname.with(|path| is_active(item, path)))
            >
                {item.icon.map(|icon| icons::nav_icon(icon, "size-5"))}
                <span>{item.title}</span>
                {item.has_children().then(|| icons::glyph(BsChevronDown, "ml-auto size-4"))}
            </A>
            {item
                .has_children()
                .then(|| {
                    view! {
                        <div class="flex flex-col ml-6 space-y-1">
                            {item.children.iter().map(|child| child_link(child, pathname)).collect_view()}
                        </div>
                    }
                })}
        </div>
    }
}

fn child_link(child: &'static NavigationItem, pathname: Signal<String>) -> impl IntoView {
    view! {
        <A
            href=child.landing_href()
            attr:class=move || styles::mobile_child_class(pathname.with(|path| is_current(child.href, path)))
        >
            {child.title}
        </A>
    }
}
