//! # client
//!
//! Leptos + WASM web client for Block Paper Scissors.
//!
//! Holds the wallet session state, the operations that move it between
//! states (`session`), the public-route guard, and the small UI shell that
//! triggers those operations. The wallet-connection library, router, and
//! clipboard are reached through narrow seams so the session logic runs
//! unchanged in native tests.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: panic hook, console logger, then mount `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
