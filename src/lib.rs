//! # member-form
//!
//! Leptos + WASM client for the community membership registration form and
//! its statistics page.
//!
//! Field rules, repeating family sub-forms, responsive input sizing and the
//! submit gate live in plain Rust state types (`state`, `util`) so they are
//! testable without a browser. `components` and `pages` bind that state to
//! the DOM; the `csr` feature enables the browser entry point.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging, read the embedded configuration and
/// mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();

    // Install at full verbosity so config fallback warnings are visible,
    // then narrow to the configured level.
    let _ = console_log::init_with_level(log::Level::Trace);
    let config = crate::config::FormConfig::load();
    log::set_max_level(config.log_level().unwrap_or(log::Level::Info).to_level_filter());
    log::info!("member form starting");

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
