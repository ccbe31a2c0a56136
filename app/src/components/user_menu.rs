//! Avatar button and dropdown in the branding bar.

use icondata::BsBoxArrowRight;
use leptos::prelude::*;

use crate::{components::icons, identity::Identity};

pub const LOGIN_HREF: &str = "/login";
pub const LOGOUT_HREF: &str = "/logout";

const TRIGGER_CLASS: &str = "flex justify-center items-center p-1 rounded-full size-10 hover:bg-[#1e4080]";

/// Renders the user's avatar menu, or a "Log in" link when nobody is signed in.
pub fn component(identity: Option<Identity>) -> AnyView {
    match identity {
        Some(identity) => signed_in(identity).into_any(),
        None => view! {
            <a href=LOGIN_HREF class="py-1 px-3 text-sm text-white rounded-md hover:bg-[#1e4080]">
                "Log in"
            </a>
        }
        .into_any(),
    }
}

fn signed_in(identity: Identity) -> impl IntoView {
    let open = RwSignal::new(false);
    let name = identity.name.clone();

    view! {
        <div class="relative">
            <button
                type="button"
                class=TRIGGER_CLASS
                aria-haspopup="menu"
                aria-label="Open user menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|open| *open = !*open)
            >
                {avatar(&identity)}
            </button>
            <Show when=move || open.get()>
                <div
                    role="menu"
                    class="flex absolute right-0 z-50 flex-col py-1 mt-2 w-56 text-gray-900 bg-white rounded-md border border-gray-200 shadow-md dark:text-gray-100 dark:bg-gray-900 dark:border-gray-700"
                >
                    <p class="py-2 px-3 text-sm font-medium truncate">{name.clone()}</p>
                    <div class="my-1 h-px bg-gray-200 dark:bg-gray-700"></div>
                    <a
                        href=LOGOUT_HREF
                        role="menuitem"
                        class="flex gap-2 items-center py-2 px-3 text-sm hover:bg-gray-100 dark:hover:bg-gray-800"
                    >
                        {icons::glyph(BsBoxArrowRight, "size-4")}
                        "Log out"
                    </a>
                </div>
            </Show>
        </div>
    }
}

fn avatar(identity: &Identity) -> AnyView {
    match identity.avatar.clone() {
        Some(src) => view! {
            <img src=src alt=identity.name.clone() class="overflow-hidden rounded-full size-8"/>
        }
        .into_any(),
        None => view! {
            <span class="flex justify-center items-center text-sm font-medium text-white rounded-lg size-8 bg-[#2B5398]">
                {identity.initials()}
            </span>
        }
        .into_any(),
    }
}
