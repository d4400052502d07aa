//! Gatefold - combined login / signup page
//!
//! A small web application whose entire surface is the account page: a
//! single card that slides between login and signup, validates input at
//! submission time, and hands credentials to an external authentication
//! service. Built with Leptos and WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
