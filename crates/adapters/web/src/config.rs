//! Page-provided configuration.
//!
//! A page overrides the defaults with a JSON object on the root element:
//!
//! ```html
//! <html data-theme-config='{"storage_key": "site-theme"}'>
//! ```
//!
//! The root element is the only node guaranteed to exist when the module
//! loads, so the override lives there.

use duskswitch_app::config::ThemeConfig;

/// Attribute holding the JSON override.
pub const CONFIG_ATTRIBUTE: &str = "data-theme-config";

/// Read the configuration from the document's root element.
#[must_use]
pub fn read(document: &web_sys::Document) -> ThemeConfig {
    let raw = document
        .document_element()
        .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    parse(raw.as_deref())
}

/// Build the configuration from the raw attribute value.
///
/// A missing attribute gives the defaults. A malformed or invalid one is
/// logged and also gives the defaults: a broken override must not leave the
/// page without a theme.
#[must_use]
pub fn parse(raw: Option<&str>) -> ThemeConfig {
    let Some(raw) = raw else {
        return ThemeConfig::default();
    };
    ThemeConfig::from_json(raw).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring {CONFIG_ATTRIBUTE}");
        ThemeConfig::default()
    })
}
