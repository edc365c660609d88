//! Use case for forgetting every liked post

use std::sync::Arc;

use anyhow::{Context, Result};
use pk_core::ports::KeyValueStorePort;
use tracing::{debug, debug_span};

/// Deletes the liked-posts key from storage.
///
/// ## Behavior / 行为
/// - Afterwards the key is absent, so reads yield an empty set
/// - Clearing when nothing was stored is not an error
///
/// # Errors
///
/// Storage failures propagate with the key as context.
pub struct ClearLikedPosts {
    store: Arc<dyn KeyValueStorePort>,
    key: String,
}

impl ClearLikedPosts {
    pub fn new(store: Arc<dyn KeyValueStorePort>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn execute(&self) -> Result<()> {
        let _span = debug_span!("usecase.clear_liked_posts.execute", key = %self.key).entered();

        self.store
            .remove(&self.key)
            .with_context(|| format!("clear liked posts failed: {}", self.key))?;

        debug!("Liked posts cleared");
        Ok(())
    }
}
