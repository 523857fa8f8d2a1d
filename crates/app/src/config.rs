//! Configuration — names the controller reads and writes in the page.
//!
//! Every field has a default matching the stylesheet and markup the toggler
//! ships with, so pages normally provide nothing. A page may override fields
//! with a JSON object; missing fields keep their defaults.

use serde::Deserialize;

use duskswitch_domain::theme::Theme;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key of the persisted preference.
    pub storage_key: String,
    /// Class whose presence on root/body means the **dark** theme.
    pub marker_class: String,
    /// Id of the toggle control.
    pub toggle_id: String,
    /// Selector of the glyph element inside the toggle control.
    pub icon_selector: String,
    /// Icon classes shown on the toggle control.
    pub glyphs: GlyphConfig,
}

/// Icon classes, named after the theme they are shown in.
///
/// The glyph advertises what a click does next: the sun is shown while dark.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub dark: String,
    pub light: String,
}

impl ThemeConfig {
    /// Parse a JSON object and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Validation`] when a field is unusable.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration can be applied to a document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when a field is blank, the marker
    /// class is not a single class token, or both glyphs are identical.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("marker_class", &self.marker_class),
            ("toggle_id", &self.toggle_id),
            ("icon_selector", &self.icon_selector),
            ("glyphs.dark", &self.glyphs.dark),
            ("glyphs.light", &self.glyphs.light),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
        }
        if self.marker_class.contains(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "marker_class must be a single class name".to_string(),
            ));
        }
        if self.glyphs.dark == self.glyphs.light {
            return Err(ConfigError::Validation(
                "glyphs.dark and glyphs.light must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Icon class to show while `theme` is applied.
    #[must_use]
    pub fn glyph_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.glyphs.dark,
            Theme::Light => &self.glyphs.light,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            marker_class: "light-mode".to_string(),
            toggle_id: "themeToggle".to_string(),
            icon_selector: "i".to_string(),
            glyphs: GlyphConfig::default(),
        }
    }
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            dark: "ri-sun-line".to_string(),
            light: "ri-moon-line".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse theme configuration")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid theme configuration: {0}")]
    Validation(String),
}
