//! # studio-ui
//!
//! Leptos + WASM presentation layer for the smart-contract studio IDE.
//!
//! This crate contains the dashboard, the editor top bar with its project
//! switcher, and the IPFS save dialog. Storage and network work is delegated
//! to a [`net::backend::Backend`] implementation provided through context.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("studio-ui hydrating");
    leptos::mount::hydrate_body(app::App);
}
