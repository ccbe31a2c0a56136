//! Navigation header for the personal task & habit tracker, hosted in a small Leptos app.

use crate::components::{
    error_template::{self, AppError},
    header,
};
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{FlatRoutes, Route, Router},
    hooks::use_location,
};

pub mod api;
pub mod components;
pub mod identity;
pub mod navigation;
mod pages;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/tracker.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text("Personal Task & Habit Tracker")
                    .build(),
            ),
        )),
        body().class("bg-neutral-50 dark:bg-gray-950").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <div class="min-h-screen text-gray-900 dark:text-gray-100">
                {layout_header()}
                <main class="px-4 py-8 mx-auto md:max-w-7xl">
                    <FlatRoutes fallback=|| error_template::component(AppError::NotFound)>
                        <Route path=StaticSegment("") view=pages::home/>
                        <Route path=WildcardSegment("any") view=pages::catalog_page/>
                    </FlatRoutes>
                </main>
            </div>
        </Router>
    }
}

/// The header, fed with the breadcrumb trail of whatever page is displayed.
fn layout_header() -> impl IntoView {
    let location = use_location();
    let trail = Signal::derive(move || location.pathname.with(|path| navigation::trail(path)));
    header::component(trail)
}


#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use std::sync::Arc;

    use any_spawner::Executor;
    use futures::StreamExt;
    use leptos_router::location::RequestUrl;

    use super::*;
    use crate::{
        components::styles,
        identity::{Identity, Role},
        types::AppState,
    };

    /// Streams the whole app to HTML as the server would for `path`.
    async fn render_at(path: &str, identity: Option<Identity>) -> String {
        _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        provide_context(RequestUrl::new(path));
        provide_context(AppState {
            identity: identity.map(Arc::new),
            leptos_options: Arc::new(LeptosOptions::builder().output_name("tracker").build()),
        });

        component()
            .to_html_stream_in_order()
            .collect::<String>()
            .await
    }

    #[tokio::test]
    async fn test_anonymous_header_uses_standard_catalog() {
        let html = render_at("/dashboard", None).await;

        assert!(html.contains("Log in"));
        assert!(html.contains("Statistics"));
        assert!(!html.contains("User Management"));
        assert!(!html.contains("Statistics &amp; Reports"));
    }

    #[tokio::test]
    async fn test_admin_header_uses_admin_catalog() {
        let admin = Identity::new("Root Admin").with_roles([Role::User, Role::Admin]);
        let html = render_at("/admin/dashboard", Some(admin)).await;

        assert!(html.contains("User Management"));
        assert!(html.contains("Tasks Management"));
        assert!(!html.contains("Log in"));
    }

    #[tokio::test]
    async fn test_member_header_hides_admin_entries() {
        let member = Identity::new("Sam").with_roles([Role::from("member")]);
        let html = render_at("/habits", Some(member)).await;

        assert!(html.contains("Habits"));
        assert!(!html.contains("User Management"));
    }

    #[tokio::test]
    async fn test_breadcrumbs_only_on_child_pages() {
        let child = render_at("/habits/create", None).await;
        assert!(child.contains(r#"aria-label="Breadcrumb""#));
        assert!(child.contains(r#"aria-current="page""#));

        let top_level = render_at("/habits", None).await;
        assert!(!top_level.contains(r#"aria-label="Breadcrumb""#));
    }

    #[tokio::test]
    async fn test_only_the_current_section_is_highlighted() {
        let html = render_at("/habits/create", None).await;

        let active = styles::desktop_entry_class(true);
        assert_eq!(html.matches(active.as_str()).count(), 1);
    }
}
