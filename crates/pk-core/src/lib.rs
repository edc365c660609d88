//! # pk-core
//!
//! Core domain models and port interfaces for pagekit.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! embed URL templates, the liked-post set and its storage codec, clipboard
//! copy outcomes and the site configuration DTO.

pub mod clipboard;
pub mod config;
pub mod embed;
pub mod liked;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{CopyOutcome, Notice, NoticeLevel};
pub use config::SiteConfig;
pub use embed::{build_embed_url, EmbedKind, UnknownEmbedKind};
pub use liked::{LikedPosts, LikedPostsError, PostId};
