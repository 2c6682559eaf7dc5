//! # client
//!
//! Leptos + WASM front-end for the sustainable farming advisory.
//!
//! The user uploads a photo of their land, the browser posts it to the
//! external analysis service, and the page renders land type, greenness,
//! weather, suggested practices, and estimated costs.
//!
//! The same crate is compiled twice: with `ssr` for the host server's
//! renderer and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
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
    leptos::mount::hydrate_body(app::App);
}
