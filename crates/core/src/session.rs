//! Durable session persistence
//!
//! The session lives in three independent string slots of a key-value
//! store (the browser's `localStorage` in production). The store is the
//! only source of truth; anything held in memory is rebuilt from it.

use crate::config::StorageKeys;
use crate::error::StorageError;
use crate::token::Token;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String-keyed durable storage
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str);
}

/// In-memory storage; clones share the same slots
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// The authenticated-state bundle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<Token>,
    pub refresh_token: Option<Token>,
    /// Access token expiry marker, milliseconds since epoch
    pub expires_at_ms: Option<i64>,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none() && self.expires_at_ms.is_none()
    }
}

/// Reads and writes the session through a [`KeyValueStorage`]
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
    keys: StorageKeys,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    /// Persist present fields and remove absent ones
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.put(&self.keys.access_token, session.access_token.as_ref().map(Token::as_str))?;
        self.put(&self.keys.refresh_token, session.refresh_token.as_ref().map(Token::as_str))?;
        let expiry = session.expires_at_ms.map(|ms| ms.to_string());
        self.put(&self.keys.expiry, expiry.as_deref())
    }

    pub fn load(&self) -> Session {
        Session {
            access_token: self.access_token(),
            refresh_token: self.refresh_token(),
            expires_at_ms: self
                .storage
                .get_item(&self.keys.expiry)
                .and_then(|raw| raw.trim().parse().ok()),
        }
    }

    /// Remove all three slots
    pub fn clear(&self) {
        self.storage.remove_item(&self.keys.access_token);
        self.storage.remove_item(&self.keys.refresh_token);
        self.storage.remove_item(&self.keys.expiry);
    }

    pub fn access_token(&self) -> Option<Token> {
        self.storage.get_item(&self.keys.access_token).map(Token::from)
    }

    pub fn refresh_token(&self) -> Option<Token> {
        self.storage.get_item(&self.keys.refresh_token).map(Token::from)
    }

    /// Replace the access token and its expiry marker, keeping the refresh token
    pub fn replace_access(&self, token: &Token, expires_at_ms: i64) -> Result<(), StorageError> {
        self.storage.set_item(&self.keys.access_token, token.as_str())?;
        self.storage
            .set_item(&self.keys.expiry, &expires_at_ms.to_string())
    }

    fn put(&self, key: &str, value: Option<&str>) -> Result<(), StorageError> {
        match value {
            Some(value) => self.storage.set_item(key, value),
            None => {
                self.storage.remove_item(key);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (MemoryStorage, SessionStore) {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(Rc::new(storage.clone()), StorageKeys::default());
        (storage, store)
    }

    #[test]
    fn test_save_and_load() {
        let (storage, store) = store();
        let session = Session {
            access_token: Some(Token::from("a.b.c")),
            refresh_token: Some(Token::from("d.e.f")),
            expires_at_ms: Some(1_700_000_000_000),
        };

        store.save(&session).unwrap();
        assert_eq!(storage.get_item("sw_token").as_deref(), Some("a.b.c"));
        assert_eq!(storage.get_item("sw_refresh_token").as_deref(), Some("d.e.f"));
        assert_eq!(
            storage.get_item("sw_token_expiry").as_deref(),
            Some("1700000000000")
        );
        assert_eq!(store.load(), session);
    }

    #[test]
    fn test_save_removes_absent_fields() {
        let (storage, store) = store();
        storage.set_item("sw_refresh_token", "stale").unwrap();

        store
            .save(&Session {
                access_token: Some(Token::from("a.b.c")),
                ..Session::default()
            })
            .unwrap();

        assert!(!storage.contains_key("sw_refresh_token"));
        assert!(!storage.contains_key("sw_token_expiry"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let (storage, store) = store();
        store
            .save(&Session {
                access_token: Some(Token::from("a.b.c")),
                refresh_token: Some(Token::from("d.e.f")),
                expires_at_ms: Some(1),
            })
            .unwrap();
        storage.set_item("theme", "dark").unwrap();

        store.clear();
        assert!(store.load().is_empty());
        assert_eq!(storage.get_item("theme").as_deref(), Some("dark"));

        // Clearing twice is harmless
        store.clear();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_unparseable_expiry_is_absent() {
        let (storage, store) = store();
        storage.set_item("sw_token_expiry", "soon").unwrap();
        assert_eq!(store.load().expires_at_ms, None);
    }

    #[test]
    fn test_survives_new_store_instance() {
        let storage = MemoryStorage::new();
        let first = SessionStore::new(Rc::new(storage.clone()), StorageKeys::default());
        first.replace_access(&Token::from("a.b.c"), 42).unwrap();

        let second = SessionStore::new(Rc::new(storage), StorageKeys::default());
        let session = second.load();
        assert_eq!(session.access_token, Some(Token::from("a.b.c")));
        assert_eq!(session.expires_at_ms, Some(42));
        assert_eq!(session.refresh_token, None);
    }
}
