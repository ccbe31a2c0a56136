//! Role-scoped navigation data and the pure logic the header runs on every render.
//!
//! Nothing here touches the DOM: the catalogs are `static` data, and choosing a
//! catalog, matching the current path, and building a breadcrumb trail are plain
//! functions over that data. The `components` module turns the results into views.

mod active;
mod catalog;
mod resolver;
mod trail;

pub use active::{is_active, is_current};
pub use catalog::{
    ADMIN_CATALOG, ALL_CATALOGS, CatalogError, CatalogKind, NavIcon, NavigationCatalog,
    NavigationItem, STANDARD_CATALOG, UTILITY_NAV_ITEMS, find, lookup, validate,
};
pub use resolver::{resolve, resolve_optional};
pub use trail::{BreadcrumbItem, should_show_breadcrumbs, trail, trail_for};
