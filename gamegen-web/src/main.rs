//! GAME GEN AI Web Frontend
//!
//! Landing page plus the wallet-gated generation chat, rendered client-side
//! with Leptos.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panics show up in the browser console instead of an opaque `unreachable`
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("GAME GEN AI frontend starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
