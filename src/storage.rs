//! Client-local key-value persistence.
//!
//! The countdown only ever needs string get/set by key, so the browser's
//! `localStorage` sits behind [`KvStore`] and tests swap in [`MemoryStore`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistError {
    #[error("persistent storage is unavailable")]
    Unavailable,
    #[error("stored value {0:?} is not a timestamp")]
    Corrupt(String),
    #[error("storage rejected write for key {0}")]
    WriteFailed(String),
}

pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// `window.localStorage`.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, PersistError> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(|storage| Self { storage })
            .ok_or(PersistError::Unavailable)
    }
}

impl KvStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        self.storage
            .get_item(key)
            .map_err(|_| PersistError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| PersistError::WriteFailed(key.to_string()))
    }
}

/// In-process store. Clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Number of `set` calls since creation, seeded entries excluded.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// `localStorage` when the browser allows it (private modes and sandboxed
/// iframes may not), otherwise a throwaway in-memory store.
pub fn browser_store() -> Box<dyn KvStore> {
    match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!("{}, falling back to in-memory storage", err);
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_reads_back_what_was_set() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "42").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("42"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::with_entry("k", "1");
        let other = store.clone();
        other.set("k", "2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn seeded_entries_are_not_counted_as_writes() {
        let store = MemoryStore::with_entry("k", "1");
        assert_eq!(store.write_count(), 0);
        store.remove("k");
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn persist_errors_describe_themselves() {
        assert_eq!(
            PersistError::Corrupt("abc".into()).to_string(),
            "stored value \"abc\" is not a timestamp"
        );
        assert_eq!(
            PersistError::Unavailable.to_string(),
            "persistent storage is unavailable"
        );
    }
}
