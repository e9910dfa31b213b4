//! # smartplate-client
//!
//! Leptos + WASM frontend for the SmartPlate food-donation platform.
//!
//! This crate contains the route table, the session store and auth context,
//! the route guard, and the pages for each role. All business data lives
//! behind the backend REST API; this crate only signs users in, remembers
//! them, and sends them to the dashboard their role allows.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
