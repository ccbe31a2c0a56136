//! Placeholder pages for every catalog destination.
//!
//! The tracker's real screens live elsewhere; the header only needs each
//! catalog path to resolve to a titled page, and anything else to 404.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_location};

use crate::{
    components::error_template::{self, AppError},
    navigation::{NavigationItem, lookup},
};

pub fn home() -> impl IntoView {
    view! {
        <Title text="Personal Task & Habit Tracker"/>
        <section class="flex flex-col gap-4">
            <h1 class="text-2xl font-semibold">"Personal Task & Habit Tracker"</h1>
            <p class="text-gray-600 dark:text-gray-400">"Stay organized, build habits."</p>
            <div class="flex gap-2">
                <A href="/dashboard" attr:class="py-2 px-4 text-white rounded-md bg-[#2B5398] hover:bg-[#1e4080]">
                    "Open dashboard"
                </A>
            </div>
        </section>
    }
}

/// Renders the catalog entry registered for the current path, or a 404.
pub fn catalog_page() -> impl IntoView {
    let location = use_location();

    move || match location.pathname.with(|path| lookup(path)) {
        Some(item) => destination(item).into_any(),
        None => error_template::component(AppError::NotFound).into_any(),
    }
}

fn destination(item: &'static NavigationItem) -> impl IntoView {
    view! {
        <Title text=item.title/>
        <section class="flex flex-col gap-4">
            <h1 class="text-2xl font-semibold">{item.title}</h1>
            {item
                .has_children()
                .then(|| {
                    view! {
                        <ul class="grid gap-3 sm:grid-cols-2">
                            {item
                                .children
                                .iter()
                                .map(|child| {
                                    view! {
                                        <li>
                                            <A
                                                href=child.landing_href()
                                                attr:class="block p-4 rounded-lg border border-gray-200 dark:border-gray-700 hover:border-[#2B5398]"
                                            >
                                                {child.title}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                })}
        </section>
    }
}
