use serde::{Deserialize, Serialize};

use super::{ALL_CATALOGS, NavigationItem, UTILITY_NAV_ITEMS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: String,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    fn from_item(item: &NavigationItem, fallback_href: &str) -> Self {
        Self::new(item.title, item.href.unwrap_or(fallback_href))
    }
}

/// The breadcrumb strip is only worth showing when there is more than one step.
#[must_use]
pub fn should_show_breadcrumbs(items: &[BreadcrumbItem]) -> bool {
    items.len() > 1
}

/// Breadcrumbs for `path` within one menu.
///
/// A top-level page yields just itself. A child page yields its parent then
/// itself, unless the child is the parent's own landing link. Unknown paths
/// yield nothing.
#[must_use]
pub fn trail_for(items: &[NavigationItem], path: &str) -> Vec<BreadcrumbItem> {
    for item in items {
        if item.href == Some(path) {
            return vec![BreadcrumbItem::from_item(item, path)];
        }
        if let Some(child) = item.children.iter().find(|child| child.href == Some(path)) {
            return vec![
                BreadcrumbItem::from_item(item, path),
                BreadcrumbItem::from_item(child, path),
            ];
        }
    }
    Vec::new()
}

/// Breadcrumbs for `path` searched across every catalog and the utility links.
#[must_use]
pub fn trail(path: &str) -> Vec<BreadcrumbItem> {
    ALL_CATALOGS
        .iter()
        .map(|catalog| trail_for(catalog.main, path))
        .chain(core::iter::once_with(|| trail_for(&UTILITY_NAV_ITEMS, path)))
        .find(|crumbs| !crumbs.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::STANDARD_CATALOG;

    static CHILDREN: [NavigationItem; 2] = [
        NavigationItem::link("Daily", "/reports/daily"),
        NavigationItem::link("Weekly", "/reports/weekly"),
    ];

    #[test]
    fn child_page_yields_parent_and_child() {
        assert_eq!(
            trail_for(STANDARD_CATALOG.main, "/habits/create"),
            vec![
                BreadcrumbItem::new("Habits", "/habits"),
                BreadcrumbItem::new("Add New Habit", "/habits/create"),
            ]
        );
    }

    #[test]
    fn parent_landing_page_yields_single_crumb() {
        assert_eq!(
            trail_for(STANDARD_CATALOG.main, "/habits"),
            vec![BreadcrumbItem::new("Habits", "/habits")]
        );
    }

    #[test]
    fn unknown_path_yields_nothing() {
        assert!(trail_for(STANDARD_CATALOG.main, "/nowhere").is_empty());
    }

    #[test]
    fn grouping_parent_borrows_child_href() {
        let items = [NavigationItem::group("Reports").with_children(&CHILDREN)];
        assert_eq!(
            trail_for(&items, "/reports/weekly"),
            vec![
                BreadcrumbItem::new("Reports", "/reports/weekly"),
                BreadcrumbItem::new("Weekly", "/reports/weekly"),
            ]
        );
    }

    #[test]
    fn trail_searches_every_catalog() {
        let crumbs = trail("/admin/reports/activity");
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].label, "Statistics & Reports");
        assert_eq!(crumbs[1].label, "User Activity Reports");

        assert_eq!(trail("/help"), vec![BreadcrumbItem::new("Help", "/help")]);
        assert!(trail("/").is_empty());
    }

    #[test]
    fn strip_needs_more_than_one_crumb() {
        assert!(!should_show_breadcrumbs(&[]));
        assert!(!should_show_breadcrumbs(&[BreadcrumbItem::new("Tasks", "/tasks")]));
        assert!(should_show_breadcrumbs(&[
            BreadcrumbItem::new("Tasks", "/tasks"),
            BreadcrumbItem::new("Create New Task", "/tasks/create"),
        ]));
    }
}
