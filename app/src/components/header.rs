use icondata::BsCheck2Circle;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::{
    api::current_identity,
    components::{breadcrumbs, desktop_nav, icons, mobile_nav, styles, user_menu},
    identity::Identity,
    navigation::{BreadcrumbItem, NavigationCatalog, resolve_optional},
};

type Resolver = fn(Option<&Identity>) -> &'static NavigationCatalog;

/// Top of every page: branding bar, role-dependent navigation row and the
/// breadcrumb strip.
///
/// The identity comes from the `current_identity` server function. The
/// catalog is resolved from it once per identity change and shared by both
/// menus; every entry is matched against the router's current path.
pub fn component(breadcrumbs: Signal<Vec<BreadcrumbItem>>) -> impl IntoView {
    let location = use_location();
    let pathname = Signal::from(location.pathname);

    let identity = Resource::new(
        || (),
        |()| async move { current_identity().await.ok().flatten() },
    );
    let current = Signal::derive(move || identity.get().flatten());
    let catalog = catalog_memo(current, resolve_optional);

    view! {
        <header>
            <div class=format!("text-white {}", styles::BRAND_BACKGROUND)>
                <div class="flex justify-between items-center px-4 mx-auto h-16 md:max-w-7xl">
                    {branding()}
                    <div class="flex items-center space-x-3">
                        <Transition fallback=|| ()>
                            {move || Suspend::new(async move {
                                user_menu::component(identity.await)
                            })}
                        </Transition>
                    </div>
                </div>
            </div>

            <nav
                aria-label="Main navigation"
                class="sticky top-0 z-30 bg-white border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700"
            >
                <div class="px-4 mx-auto md:max-w-7xl">
                    <Transition fallback=|| ()>
                        {move || Suspend::new(async move {
                            // `catalog` reads the same resource; render once it has settled.
                            identity.await;
                            view! {
                                {mobile_nav::component(catalog.into(), pathname)}
                                {desktop_nav::component(catalog.into(), pathname)}
                            }
                        })}
                    </Transition>
                </div>
            </nav>

            {breadcrumbs::component(breadcrumbs)}
        </header>
    }
}

/// Resolves the catalog for `identity`, re-running `resolve` only when the
/// identity itself changes.
fn catalog_memo(
    identity: Signal<Option<Identity>>,
    resolve: Resolver,
) -> Memo<&'static NavigationCatalog> {
    Memo::new(move |_| identity.with(|identity| resolve(identity.as_ref())))
}

fn branding() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3">
            {icons::glyph(BsCheck2Circle, "size-8 text-white")}
            <div class="flex flex-col">
                <span class="text-sm font-semibold">"PERSONAL TASK & HABIT TRACKER"</span>
                <span class="text-xs opacity-80">"Stay organized, build habits"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        identity::Role,
        navigation::{CatalogKind, STANDARD_CATALOG},
    };

    static RESOLVE_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn counting_resolve(identity: Option<&Identity>) -> &'static NavigationCatalog {
        RESOLVE_CALLS.fetch_add(1, Ordering::SeqCst);
        resolve_optional(identity)
    }

    #[test]
    fn test_catalog_resolved_once_per_identity() {
        let owner = Owner::new();
        owner.set();

        let identity = RwSignal::new(None::<Identity>);
        let catalog = catalog_memo(identity.into(), counting_resolve);

        assert_eq!(catalog.get().kind, CatalogKind::Standard);
        assert_eq!(catalog.get().main, STANDARD_CATALOG.main);
        catalog.with(|catalog| assert!(!catalog.main.is_empty()));
        assert_eq!(RESOLVE_CALLS.load(Ordering::SeqCst), 1);

        identity.set(Some(Identity::new("Root").with_roles([Role::Admin])));
        assert_eq!(catalog.get().kind, CatalogKind::Admin);
        assert_eq!(catalog.get().kind, CatalogKind::Admin);
        assert_eq!(RESOLVE_CALLS.load(Ordering::SeqCst), 2);
    }
}
