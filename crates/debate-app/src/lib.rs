//! Debate App: WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the browser adapters around a `DebateController` and hands
//! the host page a [`DebateClient`] to drive it.

mod client;

pub use client::DebateClient;

use wasm_bindgen::prelude::*;

/// WASM entry point, runs once when the module is instantiated
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Debate client WASM starting...");
}
