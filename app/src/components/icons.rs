use icondata::Icon;
use leptos::prelude::*;

use crate::navigation::NavIcon;

/// Draws an icon from the registry, inheriting the surrounding text colour.
pub fn glyph(icon: Icon, class: &'static str) -> impl IntoView {
    view! {
        <svg
            viewBox=icon.view_box
            fill="currentColor"
            aria-hidden="true"
            class=class
            inner_html=icon.data
        ></svg>
    }
}

pub fn nav_icon(icon: NavIcon, class: &'static str) -> impl IntoView {
    glyph(icon.glyph(), class)
}
