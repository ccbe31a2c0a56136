//! UI building blocks for the tracker: the navigation header and its parts,
//! plus the error page used for unknown routes.
//!
//! `header` is the entry point; the other header modules are its pieces and are
//! only public so the host layout can reuse them.

pub mod breadcrumbs;
pub mod desktop_nav;
pub mod error_template;
pub mod header;
pub mod icons;
pub mod mobile_nav;
pub mod styles;
pub mod user_menu;
