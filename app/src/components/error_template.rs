//! Error page for routes the tracker does not know about.
//!
//! During server rendering the matching HTTP status is also written to the
//! response.

use http::status::StatusCode;
use icondata::BsArrowLeft;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use thiserror::Error;

use crate::components::icons;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Page Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders `error` as a full page with a link back to the dashboard.
pub fn component(error: AppError) -> impl IntoView {
    let status = error.status_code();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(status);
        }
    }

    view! {
        <Title text=error.to_string()/>
        <div class="grid place-content-center py-16 px-4 h-full antialiased">
            <h1 class="mb-6 text-center text-xl tracking-widest text-gray-500 uppercase">
                {format!("{} | {error}", status.as_u16())}
            </h1>
            <div class="flex gap-1 justify-center items-center text-center duration-200 hover:text-[#2B5398]">
                <A href="/dashboard" attr:class="flex gap-1 items-center">
                    {icons::glyph(BsArrowLeft, "size-4")}
                    "Back to dashboard"
                </A>
            </div>
        </div>
    }
}
