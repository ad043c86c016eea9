//! # client
//!
//! Leptos frontend for the Brisk Farm Solutions & Construction Company site:
//! the public marketing pages, the donation wizard and the admin CMS.
//!
//! Built with `ssr` for the Axum host and `hydrate` for the browser bundle.
//! All backend traffic goes through `net::api` to same-origin `/api/v1`
//! paths, which the host proxies onto the REST backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
