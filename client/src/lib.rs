//! # client
//!
//! Leptos + WASM front end for the todo list. Server-rendered by `server`
//! (`ssr` feature) and hydrated in the browser (`hydrate` feature).
//!
//! List logic and persistence live in the `todos` crate; this crate supplies
//! the view components, the `localStorage` backend, and the color-scheme probe.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
