use super::errors::StorageError;

/// Persistent string key-value store.
///
/// Mirrors origin-scoped browser storage: values survive restarts, keys are
/// plain strings, and a write replaces the previous value wholesale.
pub trait KeyValueStorePort: Send + Sync {
    /// Get a value by key. `Ok(None)` when the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Set a value by key, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value by key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
