//! # duskswitch-adapter-memory
//!
//! In-memory implementations of the application ports.
//!
//! | Adapter | Port | Behaviour |
//! |---------|------|-----------|
//! | [`InMemoryPreferenceStore`] | `PreferenceStore` | `HashMap` of strings, can be switched to fail |
//! | [`InMemoryDocument`] | `Document` | Root, optional body, optional toggle control with optional icon |
//!
//! ## Dependency rule
//!
//! Depends on `duskswitch-app` (port traits) and `duskswitch-domain` only.

mod document;
mod error;
mod store;

pub use document::{InMemoryDocument, InMemoryDocumentBuilder};
pub use error::MemoryError;
pub use store::InMemoryPreferenceStore;
