//! # client
//!
//! Leptos + WASM dashboards for the produce-traceability app: a farmer view
//! that registers products, a retailer view that annotates a scanned record
//! locally, and a customer view that verifies QR codes against the API.
//!
//! Page-level orchestration lives in `pages`, testable state transitions in
//! `state`, HTTP calls in `net`, and browser glue (storage, file reads,
//! clock) in `util`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered dashboards.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already initialized".into());
    }
    leptos::mount::hydrate_body(app::App);
}
