//! Storage backend abstraction.
//!
//! This module defines the [`KeyValueStore`] trait, a string-keyed get/set/remove
//! interface over durable storage. The picker controller receives a store as an
//! injected capability, so tests substitute [`MemoryStore`](super::MemoryStore)
//! for the file-backed [`JsonFileStore`](super::JsonFileStore).
//!
//! # Design Philosophy
//!
//! Values are opaque strings. Callers own the encoding of what they persist; the
//! store only guarantees that a `get` after a successful `set` returns the same
//! string, including across plugin restarts for durable backends.

use crate::domain::error::Result;

/// String-keyed durable key-value store.
///
/// # Implementations
///
/// - [`JsonFileStore`](super::JsonFileStore): JSON file with atomic writes (default)
/// - [`MemoryStore`](super::MemoryStore): process-local map, used in tests and as a
///   fallback when the file store cannot be opened
///
/// # Examples
///
/// ```
/// use zemoji::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("greeting", "hello")?;
/// assert_eq!(store.get("greeting")?.as_deref(), Some("hello"));
/// store.remove("greeting")?;
/// assert_eq!(store.get("greeting")?, None);
/// # Ok::<(), zemoji::PickerError>(())
/// ```
pub trait KeyValueStore: std::fmt::Debug {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal cannot be made durable.
    fn remove(&mut self, key: &str) -> Result<()>;
}
