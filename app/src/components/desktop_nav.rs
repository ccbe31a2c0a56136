//! Horizontal navigation row for `lg` screens and up.
//!
//! Entries with children open a dropdown listing them; plain entries are links.
//! The search affordance and the utility links sit on the right.

use icondata::{BsChevronDown, BsSearch};
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
    view! {
        <div class="hidden lg:flex lg:items-center lg:space-x-6 lg:h-10">
            {move || {
                catalog
                    .get()
                    .main
                    .iter()
                    .map(|item| {
                        if item.has_children() {
                            dropdown(item, pathname).into_any()
                        } else {
                            link(item, pathname).into_any()
                        }
                    })
                    .collect_view()
            }}

            <div class="flex items-center ml-auto space-x-2">
                <button
                    type="button"
                    title="Search"
                    aria-label="Search"
                    class="flex justify-center items-center rounded-md size-8 hover:bg-gray-100 dark:hover:bg-gray-800"
                >
                    {icons::glyph(BsSearch, "size-4")}
                </button>
                {move || catalog.get().utility.iter().map(utility_link).collect_view()}
            </div>
        </div>
    }
}

fn link(item: &'static NavigationItem, pathname: Signal<String>) -> impl IntoView {
    view! {
        <div class="flex relative items-center h-full">
            <A
                href=item.landing_href()
                attr:class=move || styles::desktop_entry_class(pathname.with(|path| is_active(item, path)))
            >
                {item.icon.map(|icon| icons::nav_icon(icon, "mr-2 size-4"))}
                {item.title}
            </A>
        </div>
    }
}

fn dropdown(item: &'static NavigationItem, pathname: Signal<String>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="flex relative items-center h-full">
            <button
                type="button"
                class=move || styles::desktop_entry_class(pathname.with(|path| is_active(item, path)))
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|open| *open = !*open)
            >
                {item.icon.map(|icon| icons::nav_icon(icon, "mr-1 size-4"))}
                <span>{item.title}</span>
                {icons::glyph(BsChevronDown, "size-3")}
            </button>
            <Show when=move || open.get()>
                <div
                    role="menu"
                    class="flex absolute left-0 top-full z-50 flex-col py-1 mt-1 w-48 bg-white rounded-md border border-gray-200 shadow-md dark:bg-gray-900 dark:border-gray-700"
                    on:click=move |_| open.set(false)
                >
                    {item
                        .children
                        .iter()
                        .map(|child| {
                            view! {
                                <A
                                    href=child.landing_href()
                                    attr:class=move || styles::dropdown_link_class(pathname.with(|path| is_current(child.href, path)))
                                >
                                    {child.title}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

fn utility_link(item: &'static NavigationItem) -> impl IntoView {
    view! {
        <A
            href=item.landing_href()
            attr:title=item.title
            attr:aria-label=item.title
            attr:class="inline-flex justify-center items-center p-0 text-sm font-medium rounded-md transition-colors size-8 hover:bg-gray-100 dark:hover:bg-gray-800"
        >
            {item.icon.map(|icon| icons::nav_icon(icon, "size-4"))}
        </A>
    }
}
