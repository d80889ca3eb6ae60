//! # client
//!
//! Leptos + WASM frontend for the personal-finance landing page.
//!
//! This crate contains the page, its section components, the static content
//! tables and the view state. The same tree is server-rendered by the root
//! `finance-landing` binary (`ssr` feature) and hydrated in the browser
//! (`hydrate` feature).

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
