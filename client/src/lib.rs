//! # client
//!
//! Leptos + WASM frontend for the CEO dashboard: mock KPIs, agent status,
//! a finance snapshot, a decision queue, and a chat drawer with canned
//! replies from the assistant.
//!
//! This crate contains the page, components, application state, and the
//! hardcoded records. Nothing is fetched or persisted; all state is local to
//! the page.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
///
/// Hydrates [`app::App`] from the mount container. When the container is
/// missing the app is not started and a fallback message replaces the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match util::mount::find_mount() {
        Ok(root) => {
            leptos::mount::hydrate_from(root, app::App).forget();
            log::info!("dashboard hydrated into #{}", util::mount::MOUNT_ID);
        }
        Err(e) => {
            log::warn!("{e}; showing fallback");
            util::mount::show_fallback();
        }
    }
}
