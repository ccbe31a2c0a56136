use std::collections::HashSet;

use icondata::{
    BsBullseye, BsCheckSquare, BsClipboardCheck, BsGraphUp, BsGrid, BsPeople, BsQuestionCircle,
    Icon,
};
use thiserror::Error;

/// Symbolic icon reference carried by a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Dashboard,
    Tasks,
    Habits,
    Statistics,
    Users,
    TaskManagement,
    Help,
}

impl NavIcon {
    /// The registry glyph drawn for this icon.
    pub fn glyph(self) -> Icon {
        match self {
            Self::Dashboard => BsGrid,
            Self::Tasks => BsCheckSquare,
            Self::Habits => BsBullseye,
            Self::Statistics => BsGraphUp,
            Self::Users => BsPeople,
            Self::TaskManagement => BsClipboardCheck,
            Self::Help => BsQuestionCircle,
        }
    }
}

/// A single entry of a navigation menu.
///
/// `href` is optional so that grouping entries without a page of their own can
/// be described. `children` is empty for plain links; the catalogs below never
/// nest deeper than one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub title: &'static str,
    pub href: Option<&'static str>,
    pub icon: Option<NavIcon>,
    pub children: &'static [NavigationItem],
}

impl NavigationItem {
    #[must_use]
    pub const fn link(title: &'static str, href: &'static str) -> Self {
        Self {
            title,
            href: Some(href),
            icon: None,
            children: &[],
        }
    }

    #[must_use]
    pub const fn group(title: &'static str) -> Self {
        Self {
            title,
            href: None,
            icon: None,
            children: &[],
        }
    }

    #[must_use]
    pub const fn with_icon(mut self, icon: NavIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub const fn with_children(mut self, children: &'static [Self]) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Where a click on this entry should go: its own href, or the first child's
    /// for grouping entries.
    #[must_use]
    pub fn landing_href(&self) -> &'static str {
        self.href
            .or_else(|| self.children.iter().find_map(|child| child.href))
            .unwrap_or("/")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Standard,
    Admin,
}

/// The fixed set of entries shown for one kind of user.
#[derive(Debug, PartialEq, Eq)]
pub struct NavigationCatalog {
    pub kind: CatalogKind,
    pub main: &'static [NavigationItem],
    pub utility: &'static [NavigationItem],
}

static USER_TASKS: [NavigationItem; 2] = [
    NavigationItem::link("All Tasks", "/tasks"),
    NavigationItem::link("Create New Task", "/tasks/create"),
];

static USER_HABITS: [NavigationItem; 3] = [
    NavigationItem::link("My Habits", "/habits"),
    NavigationItem::link("Add New Habit", "/habits/create"),
    NavigationItem::link("Calendar View", "/habits/calendar"),
];

static USER_STATISTICS: [NavigationItem; 3] = [
    NavigationItem::link("Tasks Completed", "/statistics/tasks"),
    NavigationItem::link("Habit Streaks", "/statistics/habits"),
    NavigationItem::link("Weekly Summary", "/statistics/weekly"),
];

static USER_NAV_ITEMS: [NavigationItem; 4] = [
    NavigationItem::link("Dashboard", "/dashboard").with_icon(NavIcon::Dashboard),
    NavigationItem::link("Tasks", "/tasks")
        .with_icon(NavIcon::Tasks)
        .with_children(&USER_TASKS),
    NavigationItem::link("Habits", "/habits")
        .with_icon(NavIcon::Habits)
        .with_children(&USER_HABITS),
    NavigationItem::link("Statistics", "/statistics")
        .with_icon(NavIcon::Statistics)
        .with_children(&USER_STATISTICS),
];

static ADMIN_USERS: [NavigationItem; 4] = [
    NavigationItem::link("All Users", "/admin/users"),
    NavigationItem::link("All Roles", "/admin/roles"),
    NavigationItem::link("Create Role", "/admin/roles/create"),
    NavigationItem::link("Assign Permissions", "/admin/permissions"),
];

static ADMIN_TASKS: [NavigationItem; 3] = [
    NavigationItem::link("All Tasks", "/admin/tasks"),
    NavigationItem::link("Pending Approval", "/admin/tasks/pending"),
    NavigationItem::link("Overdue Tasks", "/admin/tasks/overdue"),
];

static ADMIN_HABITS: [NavigationItem; 2] = [
    NavigationItem::link("All Habits", "/admin/habits"),
    NavigationItem::link("Habit Logs", "/admin/habits/logs"),
];

static ADMIN_REPORTS: [NavigationItem; 4] = [
    NavigationItem::link("User Activity Reports", "/admin/reports/activity"),
    NavigationItem::link("Task Completion Trends", "/admin/reports/tasks"),
    NavigationItem::link("Habit Streak Summaries", "/admin/reports/habits"),
    NavigationItem::link("Audit Logs", "/admin/audit"),
];

static ADMIN_NAV_ITEMS: [NavigationItem; 5] = [
    NavigationItem::link("Dashboard", "/admin/dashboard").with_icon(NavIcon::Dashboard),
    NavigationItem::link("User Management", "/admin/users")
        .with_icon(NavIcon::Users)
        .with_children(&ADMIN_USERS),
    NavigationItem::link("Tasks Management", "/admin/tasks")
        .with_icon(NavIcon::TaskManagement)
        .with_children(&ADMIN_TASKS),
    NavigationItem::link("Habits Management", "/admin/habits")
        .with_icon(NavIcon::Habits)
        .with_children(&ADMIN_HABITS),
    NavigationItem::link("Statistics & Reports", "/admin/reports")
        .with_icon(NavIcon::Statistics)
        .with_children(&ADMIN_REPORTS),
];

/// Links shown next to the main menu whatever the user's role.
pub static UTILITY_NAV_ITEMS: [NavigationItem; 1] =
    [NavigationItem::link("Help", "/help").with_icon(NavIcon::Help)];

pub static STANDARD_CATALOG: NavigationCatalog = NavigationCatalog {
    kind: CatalogKind::Standard,
    main: &USER_NAV_ITEMS,
    utility: &UTILITY_NAV_ITEMS,
};

pub static ADMIN_CATALOG: NavigationCatalog = NavigationCatalog {
    kind: CatalogKind::Admin,
    main: &ADMIN_NAV_ITEMS,
    utility: &UTILITY_NAV_ITEMS,
};

pub static ALL_CATALOGS: [&NavigationCatalog; 2] = [&STANDARD_CATALOG, &ADMIN_CATALOG];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("title `{title}` appears more than once in the same menu")]
    DuplicateTitle { title: String },
    #[error("href `{href}` is registered by more than one entry")]
    DuplicateHref { href: String },
    #[error("entry `{title}` nests children deeper than one level")]
    TooDeep { title: String },
}

/// Checks the structural rules every catalog must follow.
///
/// Titles are unique among siblings, hrefs are unique across the whole tree and
/// children never have children of their own. A child pointing at its own
/// parent's href is that parent's landing link and is not counted twice.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found, in menu order.
pub fn validate(items: &[NavigationItem]) -> Result<(), CatalogError> {
    check_sibling_titles(items)?;

    let mut hrefs = HashSet::new();
    for item in items {
        if let Some(href) = item.href {
            register_href(&mut hrefs, href)?;
        }

        check_sibling_titles(item.children)?;
        for child in item.children {
            if child.has_children() {
                return Err(CatalogError::TooDeep {
                    title: child.title.to_owned(),
                });
            }
            match child.href {
                Some(href) if Some(href) != item.href => register_href(&mut hrefs, href)?,
                _ => {}
            }
        }
    }

    Ok(())
}

fn check_sibling_titles(items: &[NavigationItem]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.title) {
            return Err(CatalogError::DuplicateTitle {
                title: item.title.to_owned(),
            });
        }
    }
    Ok(())
}

fn register_href<'a>(seen: &mut HashSet<&'a str>, href: &'a str) -> Result<(), CatalogError> {
    if seen.insert(href) {
        Ok(())
    } else {
        Err(CatalogError::DuplicateHref {
            href: href.to_owned(),
        })
    }
}

/// The most specific entry whose href is exactly `path`.
///
/// A child wins over a parent sharing its href, so `/tasks` finds "All Tasks"
/// rather than "Tasks".
pub fn find<'a>(items: &'a [NavigationItem], path: &str) -> Option<&'a NavigationItem> {
    items.iter().find_map(|item| {
        item.children
            .iter()
            .find(|child| child.href == Some(path))
            .or_else(|| (item.href == Some(path)).then_some(item))
    })
}

/// Looks `path` up in every catalog and in the utility links.
pub fn lookup(path: &str) -> Option<&'static NavigationItem> {
    ALL_CATALOGS
        .iter()
        .find_map(|catalog| find(catalog.main, path))
        .or_else(|| find(&UTILITY_NAV_ITEMS, path))
}
