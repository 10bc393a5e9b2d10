//! # medconsult-web
//!
//! Leptos single-page frontend for the Medical Consulting site: blog and
//! services listings with category and search filters, account login and
//! signup for patients, doctors and clinics, and the hidden admin area.
//!
//! Domain rules (normalization, filtering, session persistence, route
//! guarding) live in the `content` crate; this crate only wires them to
//! reactive signals and the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
