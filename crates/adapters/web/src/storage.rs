//! `window.localStorage` preference store.

use duskswitch_app::ports::PreferenceStore;
use duskswitch_domain::error::ThemeError;
use web_sys::{Storage, Window};

use crate::error::WebError;

/// [`PreferenceStore`] backed by the origin's `localStorage`.
///
/// The storage object is looked up on every call: browsers may refuse
/// access (private mode, blocked cookies) and that surfaces as an error
/// instead of a panic.
pub struct LocalStorage {
    window: Window,
}

impl LocalStorage {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn storage(&self) -> Result<Storage, WebError> {
        self.window
            .local_storage()?
            .ok_or(WebError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let value = self.storage()?.get_item(key).map_err(WebError::from)?;
        Ok(value)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(WebError::from)?;
        Ok(())
    }
}
