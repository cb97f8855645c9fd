//! Session storage backed by the window's `localStorage`

use holocron_core::error::StorageError;
use holocron_core::session::KeyValueStorage;
use web_sys::Storage;

/// [`KeyValueStorage`] over `window.localStorage`
///
/// Reads from an unavailable store (private browsing, no window) behave
/// like an empty store; writes report [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub const fn new() -> Self {
        Self
    }

    fn local() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::write(key, format!("{err:?}")))
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::local()
            && storage.remove_item(key).is_err()
        {
            tracing::debug!(key, "Failed to remove storage item");
        }
    }
}
