//! # house-dashboard
//!
//! Leptos + WASM frontend for managing house records.
//!
//! This crate contains pages, components, the session state machine that
//! gates protected routes, and the REST client for the house backend. The
//! backend itself is a separate service.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
