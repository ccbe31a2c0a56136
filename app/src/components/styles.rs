//! Tailwind class strings shared by the header's menus.
//!
//! Kept as plain functions of the "active" flag so that the choice of styles can
//! be checked without rendering anything.

pub const BRAND_BACKGROUND: &str = "bg-[#2B5398]";

pub const ACTIVE_ITEM_STYLES: &str =
    "text-[#2B5398] bg-[#2B5398]/20 dark:bg-[#2B5398]/30 dark:text-[#5b82c7]";

const DESKTOP_ACTIVE: &str = "border-[#1e3a70] text-[#1e3a70]";

#[must_use]
pub fn mobile_entry_class(active: bool) -> String {
    let state = if active {
        ACTIVE_ITEM_STYLES
    } else {
        "hover:bg-neutral-100 dark:hover:bg-neutral-800"
    };
    format!("flex items-center space-x-2 rounded-md p-2 font-medium transition-colors {state}")
}

#[must_use]
pub fn mobile_child_class(active: bool) -> String {
    let state = if active {
        ACTIVE_ITEM_STYLES
    } else {
        "text-gray-500 hover:bg-neutral-100 hover:text-gray-900 dark:hover:bg-neutral-800"
    };
    format!("rounded px-2 py-1 text-sm transition-colors {state}")
}

#[must_use]
pub fn desktop_entry_class(active: bool) -> String {
    let base = "flex h-full items-center space-x-1 border-b-2 border-transparent px-3 text-sm font-medium transition-colors hover:border-[#1e3a70] hover:text-[#1e3a70]";
    if active {
        format!("{base} {DESKTOP_ACTIVE}")
    } else {
        base.to_owned()
    }
}

#[must_use]
pub fn dropdown_link_class(active: bool) -> String {
    let base = "flex items-center rounded-sm px-3 py-2 text-sm transition-colors hover:bg-gray-100 dark:hover:bg-gray-800";
    if active {
        format!("{base} bg-gray-100 dark:bg-gray-800")
    } else {
        base.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_mobile_entries_use_brand_highlight() {
        assert!(mobile_entry_class(true).contains(ACTIVE_ITEM_STYLES));
        assert!(!mobile_entry_class(false).contains(ACTIVE_ITEM_STYLES));
        assert!(mobile_child_class(true).contains(ACTIVE_ITEM_STYLES));
        assert!(!mobile_child_class(false).contains(ACTIVE_ITEM_STYLES));
    }

    #[test]
    fn active_desktop_entries_get_underline() {
        assert!(desktop_entry_class(true).ends_with(DESKTOP_ACTIVE));
        assert!(!desktop_entry_class(false).contains(DESKTOP_ACTIVE));
    }

    #[test]
    fn active_dropdown_links_get_background() {
        assert!(dropdown_link_class(true).ends_with("bg-gray-100 dark:bg-gray-800"));
        assert!(!dropdown_link_class(false).ends_with("dark:bg-gray-800"));
    }
}
