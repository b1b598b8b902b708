//! payme Web Frontend
//!
//! Leptos-based WASM pay page: displays one invoice and hands the user off
//! to the provider-hosted checkout.

mod api;
mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
