//! # activity-client
//!
//! Leptos + WASM frontend for the Activity social events application:
//! authentication screens, an events feed, and the session/route-guard
//! workflow that gates protected pages behind login.
//!
//! The crate is a library on purpose: the `hydrate` feature builds the
//! browser bundle, the `ssr` feature is consumed by an external serving
//! binary, and with no features enabled all non-view logic compiles on the
//! host for `cargo test`.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod validate;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
