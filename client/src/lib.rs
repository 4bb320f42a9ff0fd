//! # client
//!
//! Leptos + WASM frontend for the Leasa listing and chat assistant.
//!
//! This crate contains pages, components, view state, network types, and the
//! optional speech bridge. The host binary renders it with SSR; the `hydrate`
//! feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
