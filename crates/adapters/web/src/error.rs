//! Browser adapter error types.

use duskswitch_domain::error::ThemeError;
use wasm_bindgen::JsValue;

/// Errors specific to the browser adapters.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Not running in a window context (e.g. a worker).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("no document on window")]
    NoDocument,

    /// `localStorage` is disabled for this origin.
    #[error("local storage unavailable")]
    StorageUnavailable,

    /// A DOM or storage call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<WebError> for ThemeError {
    fn from(err: WebError) -> Self {
        ThemeError::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_storage_unavailable_error() {
        assert_eq!(
            WebError::StorageUnavailable.to_string(),
            "local storage unavailable"
        );
    }

    #[test]
    fn should_display_js_error_message() {
        let err = WebError::Js("SecurityError: access denied".to_string());
        assert_eq!(err.to_string(), "javascript error: SecurityError: access denied");
    }

    #[test]
    fn should_convert_into_storage_error() {
        let err: ThemeError = WebError::NoWindow.into();
        assert!(matches!(err, ThemeError::Storage(_)));
    }
}
