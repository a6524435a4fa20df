//! Share Board Web App (Leptos + WASM)

pub mod api;
pub mod app;
pub mod components;
mod dom;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
