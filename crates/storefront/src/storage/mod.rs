//! Local key-value storage.
//!
//! The shop keeps exactly one thing durable: the shopper's cart, as a string
//! under a fixed key. [`LocalStorage`] is the narrow surface that needs, in
//! the shape of a browser's `localStorage`. Writes are synchronous.
//!
//! # Implementations
//!
//! - [`FileStorage`] - One file per key inside a data directory
//! - [`MemoryStorage`] - In-process map, with optional quota and a disabled
//!   mode for exercising failure paths

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key contains characters that cannot be stored.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Writing the value would exceed the storage quota.
    #[error("quota exceeded writing {key}: {size} bytes over a {quota} byte quota")]
    QuotaExceeded { key: String, size: usize, quota: usize },

    /// Storage is switched off.
    #[error("storage is unavailable")]
    Unavailable,

    /// Underlying filesystem failure.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A string-keyed, string-valued durable store.
pub trait LocalStorage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be modified.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: LocalStorage + ?Sized> LocalStorage for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Keys are restricted so that every backend can use them as file names.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
