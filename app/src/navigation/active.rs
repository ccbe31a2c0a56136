use super::NavigationItem;

/// Whether `href` is exactly the page being displayed.
///
/// No trailing-slash normalisation and no prefix matching: `/tasks/` and
/// `/tasks/create` are both different pages from `/tasks`.
#[must_use]
pub fn is_current(href: Option<&str>, current_path: &str) -> bool {
    href == Some(current_path)
}

/// Whether an entry should be highlighted for `current_path`.
///
/// An entry is active when its own href matches, or when one of its direct
/// children does. Grandchildren are not looked at.
#[must_use]
pub fn is_active(item: &NavigationItem, current_path: &str) -> bool {
    is_current(item.href, current_path)
        || item
            .children
            .iter()
            .any(|child| is_current(child.href, current_path))
}
