//! Use case for reading the liked post ids

use std::sync::Arc;

use pk_core::ports::KeyValueStorePort;
use pk_core::LikedPosts;
use tracing::{debug, debug_span, warn};

/// Reads the liked post ids from persistent storage.
///
/// ## Behavior / 行为
/// - Absent key reads as an empty set
/// - Any JSON number is a valid id, fractional ones included
/// - Malformed JSON, a non-array value, non-numeric elements or a failing
///   store all degrade to an empty set (logged at `warn`)
/// - Never fails
pub struct GetLikedPosts {
    store: Arc<dyn KeyValueStorePort>,
    key: String,
}

impl GetLikedPosts {
    pub fn new(store: Arc<dyn KeyValueStorePort>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn execute(&self) -> LikedPosts {
        let _span = debug_span!("usecase.get_liked_posts.execute", key = %self.key).entered();

        let raw = match self.store.get(&self.key) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "Failed to read liked posts, using empty set");
                return LikedPosts::new();
            }
        };

        match LikedPosts::decode(raw.as_deref()) {
            Ok(liked) => {
                debug!(count = liked.len(), "Liked posts loaded");
                liked
            }
            Err(err) => {
                warn!(error = %err, "Stored liked posts are unreadable, using empty set");
                LikedPosts::new()
            }
        }
    }
}
