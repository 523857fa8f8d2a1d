//! Theme — the two-valued light/dark preference.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// The user's theme preference.
///
/// Persisted as `"dark"` or `"light"`. A missing value means [`Dark`](Self::Dark).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Decode a value read from the preference store.
    ///
    /// Only the exact string `"dark"` and a missing entry decode to
    /// [`Dark`](Self::Dark). Anything else stored under the key is treated
    /// as [`Light`](Self::Light), which keeps previously persisted values
    /// meaning what they always meant.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None | Some("dark") => Self::Dark,
            Some(_) => Self::Light,
        }
    }

    /// Derive the theme from the presence of the marker class.
    #[must_use]
    pub fn from_marker(present: bool) -> Self {
        if present { Self::Dark } else { Self::Light }
    }

    /// The value written to the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}
