use leptos::prelude::*;
use leptos_router::components::A;

use crate::navigation::{BreadcrumbItem, should_show_breadcrumbs};

/// Secondary row under the navigation showing where the current page sits.
///
/// Nothing is rendered for zero or one crumb.
pub fn component(items: Signal<Vec<BreadcrumbItem>>) -> impl IntoView {
    view! {
        <Show when=move || items.with(|items| should_show_breadcrumbs(items))>
            <div class="flex w-full bg-gray-50 border-b border-gray-200 dark:bg-gray-800 dark:border-gray-700">
                <nav
                    aria-label="Breadcrumb"
                    class="flex justify-start items-center px-4 mx-auto w-full h-10 text-gray-600 md:max-w-7xl dark:text-gray-400"
                >
                    <ol class="flex items-center space-x-2 text-sm">
                        {move || {
                            let crumbs = items.get();
                            let last = crumbs.len().saturating_sub(1);
                            crumbs
                                .into_iter()
                                .enumerate()
                                .map(|(index, crumb)| crumb_view(crumb, index == last))
                                .collect_view()
                        }}
                    </ol>
                </nav>
            </div>
        </Show>
    }
}

fn crumb_view(crumb: BreadcrumbItem, is_last: bool) -> AnyView {
    if is_last {
        view! {
            <li>
                <span aria-current="page" class="text-gray-900 dark:text-gray-100">{crumb.label}</span>
            </li>
        }
        .into_any()
    } else {
        view! {
            <li class="flex items-center space-x-2">
                <A href=crumb.href attr:class="transition-colors hover:text-gray-900 dark:hover:text-gray-100">
                    {crumb.label}
                </A>
                <span aria-hidden="true">"/"</span>
            </li>
        }
        .into_any()
    }
}
