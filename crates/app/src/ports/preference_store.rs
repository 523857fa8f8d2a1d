//! Preference store port — durable key/value persistence for the theme.

use std::rc::Rc;

use duskswitch_domain::error::ThemeError;

/// Origin-scoped key/value store holding the persisted preference.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `None` when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] when the store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] when the store cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        (**self).save(key, value)
    }
}
