//! In-memory key-value storage.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::ports::{KeyValueStorage, StorageError};
use crate::domain::{Identity, IdentityError, USER_STORAGE_KEY};

/// Key-value store held in process memory.
///
/// The inbound adapter fills one per request from the session cookie; tests
/// use it in place of browser storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Store holding a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(HashMap::from([(key.into(), value.into())])),
        }
    }

    /// Store holding `identity` under the `user` key.
    ///
    /// # Errors
    ///
    /// Returns an error when the identity cannot be encoded.
    pub fn from_identity(identity: &Identity) -> Result<Self, IdentityError> {
        Ok(Self::with_entry(USER_STORAGE_KEY, identity.to_stored()?))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}
