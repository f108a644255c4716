//! # chai-client
//!
//! Leptos + WASM frontend for the Chai Street member portal: the public
//! landing page, the intro splash, login/signup forms and the post-login
//! dashboard.
//!
//! Authentication lives on a remote API. This crate only holds the bearer
//! token, hydrates the current user, and renders based on it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
