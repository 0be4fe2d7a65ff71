//! # client
//!
//! Leptos + WASM frontend for the Cyber Alert demo portal.
//!
//! This crate contains the pages, components, pure state machines, and
//! browser utilities. The server crate renders it with the `ssr` feature; the
//! browser bundle is built with `hydrate` and attaches to that markup.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
