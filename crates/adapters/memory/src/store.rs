//! In-memory preference store.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use duskswitch_app::ports::PreferenceStore;
use duskswitch_domain::error::ThemeError;

use crate::error::MemoryError;

/// A [`PreferenceStore`] kept in a `HashMap`.
///
/// [`set_available(false)`](Self::set_available) makes every read and write
/// fail, like a browser with storage disabled.
#[derive(Debug)]
pub struct InMemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
    available: Cell<bool>,
}

impl Default for InMemoryPreferenceStore {
    fn default() -> Self {
        Self {
            values: RefCell::new(HashMap::new()),
            available: Cell::new(true),
        }
    }
}

impl InMemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `value` under `key`.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Read a value directly, bypassing availability.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn check(&self) -> Result<(), MemoryError> {
        if self.available.get() {
            Ok(())
        } else {
            Err(MemoryError::Unavailable)
        }
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.check()?;
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.check()?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
