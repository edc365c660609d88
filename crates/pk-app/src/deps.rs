//! # Application Dependencies
//!
//! Parameter grouping for use case construction. Not a builder: every
//! dependency is required, nothing is defaulted.

use std::sync::Arc;

use pk_core::ports::{KeyValueStorePort, NotifierPort, SystemClipboardPort};
use pk_core::SiteConfig;

use crate::usecases::{
    ClearLikedPosts, CopyAndNotify, CopyToClipboard, GetLikedPosts, SaveLikedPosts, ToggleLikedPost,
};

pub struct AppDeps {
    pub config: SiteConfig,

    // Storage
    pub store: Arc<dyn KeyValueStorePort>,

    // Clipboard / presentation
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub notifier: Arc<dyn NotifierPort>,
}

impl AppDeps {
    pub fn get_liked_posts(&self) -> GetLikedPosts {
        GetLikedPosts::new(self.store.clone(), &self.config.liked_posts_key)
    }

    pub fn save_liked_posts(&self) -> SaveLikedPosts {
        SaveLikedPosts::new(self.store.clone(), &self.config.liked_posts_key)
    }

    pub fn clear_liked_posts(&self) -> ClearLikedPosts {
        ClearLikedPosts::new(self.store.clone(), &self.config.liked_posts_key)
    }

    pub fn toggle_liked_post(&self) -> ToggleLikedPost {
        ToggleLikedPost::new(self.store.clone(), &self.config.liked_posts_key)
    }

    pub fn copy_to_clipboard(&self) -> CopyToClipboard {
        CopyToClipboard::new(self.clipboard.clone())
    }

    pub fn copy_and_notify(&self) -> CopyAndNotify {
        CopyAndNotify::new(self.copy_to_clipboard(), self.notifier.clone())
    }
}
