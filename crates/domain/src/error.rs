//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ThemeError`]
//! when crossing a port boundary.

/// Base error for the duskswitch workspace.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A string that is neither `dark` nor `light` was parsed as a theme.
    #[error("unknown theme {0:?}")]
    UnknownTheme(String),

    /// The preference store failed to read or write.
    #[error("preference storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
