//! # hearthbook
//!
//! Leptos + WASM frontend for the Hearthbook family-memory-sharing
//! application: a family posts memory entries (title, story, images,
//! participants), comments and likes, browses them as a feed, calendar, or
//! bookshelf, and generates derivative media (animated photos, picture
//! diaries) through backend jobs.
//!
//! This crate contains pages, components, application state, the REST
//! client, and the session bootstrap flow that routes users on entry.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
