//! WebAssembly entry point for the tracker.
//!
//! The server renders the header and pages to HTML; this crate takes over that
//! markup in the browser so the menus open, close and follow client-side
//! navigation.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the server-rendered page.
///
/// Sets up `console_log` at debug level and the panic hook, then attaches
/// `app::component` to the existing DOM.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("Hydrating tracker header and routes");
    leptos::mount::hydrate_body(component);
}
