#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod dom;
pub mod pages;
pub mod router;
pub mod storage;

use catalog::TmdbCatalog;
use reelview_core::ProfileEngine;
use storage::WebProfileStore;

/// Profile engine wired to the browser catalog client and localStorage.
#[must_use]
pub const fn create_profile_engine() -> ProfileEngine<TmdbCatalog, WebProfileStore> {
    ProfileEngine::new(TmdbCatalog, WebProfileStore)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    yew::Renderer::<app::App>::new().render();
}
