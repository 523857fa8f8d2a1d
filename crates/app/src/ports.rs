//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Everything here is synchronous: the host is single-threaded and neither
//! the DOM nor the browser store ever suspends.

pub mod document;
pub mod preference_store;

pub use document::{Document, Node};
pub use preference_store::PreferenceStore;
