//! # jwt-demo
//!
//! Leptos + WASM page demonstrating a JWT login flow against an external
//! auth service: log in, keep the bearer token in `localStorage`, show its
//! decoded payload, and call two protected endpoints with it.
//!
//! The controller and everything below it are plain Rust and run natively
//! in tests. Browser glue (`localStorage`, `fetch`, mounting) is compiled
//! under the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod jwt;
pub mod net;
pub mod presenter;
pub mod state;

#[cfg(test)]
mod testutil;

/// WASM entry point: install console logging and mount the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
