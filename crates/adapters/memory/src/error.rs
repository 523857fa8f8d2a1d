//! In-memory adapter error types.

use duskswitch_domain::error::ThemeError;

/// Errors raised by the in-memory adapters.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// The store was switched to unavailable.
    #[error("in-memory store unavailable")]
    Unavailable,
}

impl From<MemoryError> for ThemeError {
    fn from(err: MemoryError) -> Self {
        ThemeError::Storage(Box::new(err))
    }
}
