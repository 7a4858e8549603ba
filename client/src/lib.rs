//! # client
//!
//! Leptos + WASM front end for the Nourish nutrition app: landing, sign-in,
//! registration, onboarding wizard and dashboard.
//!
//! Session rules (tokens, auth flags, guard decisions, onboarding draft) live
//! in the framework-free `session` crate; this crate binds them to signals,
//! browser storage and HTTP.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
