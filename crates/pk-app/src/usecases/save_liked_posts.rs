//! Use case for persisting the liked post ids

use std::sync::Arc;

use anyhow::{Context, Result};
use pk_core::ports::KeyValueStorePort;
use pk_core::LikedPosts;
use tracing::{debug, debug_span};

/// Writes the liked post ids to persistent storage.
///
/// ## Behavior / 行为
/// - Serializes the set to compact JSON and overwrites the stored value
/// - No validation, no merge with what was stored before
/// - Storage failures propagate to the caller
pub struct SaveLikedPosts {
    store: Arc<dyn KeyValueStorePort>,
    key: String,
}

impl SaveLikedPosts {
    pub fn new(store: Arc<dyn KeyValueStorePort>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// # Errors
    ///
    /// Returns the storage error, wrapped with the key, if the write fails.
    pub fn execute(&self, liked: &LikedPosts) -> Result<()> {
        let _span = debug_span!("usecase.save_liked_posts.execute", key = %self.key).entered();

        let json = liked.to_json().context("serialize liked posts failed")?;
        self.store
            .set(&self.key, &json)
            .with_context(|| format!("write liked posts failed: {}", self.key))?;

        debug!(count = liked.len(), "Liked posts saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockStore;
    use pk_core::ports::StorageError;
    use pk_core::PostId;

    #[test]
    fn test_writes_compact_json_under_key() {
        let mut store = MockStore::new();
        store
            .expect_set()
            .withf(|key, value| key == "likes" && value == "[4,1]")
            .times(1)
            .returning(|_, _| Ok(()));

        let liked: LikedPosts = [4, 1].into_iter().map(PostId::new).collect();
        SaveLikedPosts::new(Arc::new(store), "likes")
            .execute(&liked)
            .unwrap();
    }

    #[test]
    fn test_does_not_read_before_writing() {
        let mut store = MockStore::new();
        store.expect_get().never();
        store.expect_set().times(1).returning(|_, _| Ok(()));

        SaveLikedPosts::new(Arc::new(store), "likes")
            .execute(&LikedPosts::new())
            .unwrap();
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut store = MockStore::new();
        store
            .expect_set()
            .returning(|_, _| Err(StorageError::Unavailable("quota exceeded".into())));

        let err = SaveLikedPosts::new(Arc::new(store), "likes")
            .execute(&LikedPosts::new())
            .unwrap_err();

        assert!(err.to_string().contains("write liked posts failed"));
        assert!(err.root_cause().to_string().contains("quota exceeded"));
    }
}
