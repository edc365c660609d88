//! Use case for liking / unliking a single post

use std::sync::Arc;

use anyhow::Result;
use pk_core::ports::KeyValueStorePort;
use pk_core::PostId;
use tracing::{info, info_span};

use super::{GetLikedPosts, SaveLikedPosts};

/// Flips the liked state of one post: read, toggle, save.
///
/// Read anomalies start from an empty set; write failures propagate.
pub struct ToggleLikedPost {
    get: GetLikedPosts,
    save: SaveLikedPosts,
}

impl ToggleLikedPost {
    pub fn new(store: Arc<dyn KeyValueStorePort>, key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            get: GetLikedPosts::new(store.clone(), key.clone()),
            save: SaveLikedPosts::new(store, key),
        }
    }

    /// Returns `true` if the post is liked after the call.
    ///
    /// # Errors
    ///
    /// Fails only when saving the toggled set fails.
    pub fn execute(&self, id: PostId) -> Result<bool> {
        let _span = info_span!("usecase.toggle_liked_post.execute", post_id = %id).entered();

        let mut liked = self.get.execute();
        let now_liked = liked.toggle(id);
        self.save.execute(&liked)?;

        info!(now_liked, "Toggled liked post");
        Ok(now_liked)
    }
}
