//! # duskswitch-adapter-web
//!
//! Runs the theme toggler inside a browser page.
//!
//! ## Responsibilities
//! - [`LocalStorage`] — `PreferenceStore` over `window.localStorage`
//! - [`BrowserDocument`] — `Document` over the live DOM
//! - Read the page's optional `data-theme-config` override
//! - The wasm entry point: console logging and panic hook, eager pass on
//!   load, correction pass and click binding once the document is parsed
//!
//! ## Dependency rule
//! Depends on `duskswitch-app` (port traits) and `duskswitch-domain` only.

mod bootstrap;
pub mod config;
mod document;
pub mod error;
mod storage;

pub use bootstrap::run;
pub use document::BrowserDocument;
pub use storage::LocalStorage;

/// Module entry point, called by the wasm-bindgen glue as soon as the module
/// is instantiated.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // a logger is already installed by the host page's own module
        log::debug!("console logger already set");
    }
    if let Err(err) = run() {
        tracing::warn!(error = %err, "theme toggler not started");
    }
}
