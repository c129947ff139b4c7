//! Driven port for the persisted session key-value store.
//!
//! Values are opaque strings, the way browser storage holds them. The router
//! only reads; writes exist for the login flow and for test setup.

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by the storage backend.
    pub enum StorageError {
        /// The backend could not be read or written.
        Unavailable => "session storage unavailable: {message}",
    }
}

/// Port for a string key-value store.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
