//! # client
//!
//! Leptos + WASM layer for the machine tracker pages.
//!
//! The server renders every page; this crate attaches to known containers in
//! that markup. It mounts the area menu, area summary, and RFID tester
//! components, polls the machine-status and hierarchy endpoints to reconcile
//! the server-rendered machine cards, and binds the admin dialogs.
//!
//! Browser-only code sits behind the `csr` feature. Without it the crate builds
//! natively and its state and config logic are unit-tested like any other crate.

#[cfg(feature = "csr")]
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: logging, panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    app::mount();
}
