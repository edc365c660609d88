//! Business logic use cases
//!
//! Each use case wraps one host capability. `ToggleLikedPost` and
//! `CopyAndNotify` are the caller-side flows built on top of them.

pub mod clear_liked_posts;
pub mod copy_and_notify;
pub mod copy_to_clipboard;
pub mod get_liked_posts;
pub mod save_liked_posts;
pub mod toggle_liked_post;

pub use clear_liked_posts::ClearLikedPosts;
pub use copy_and_notify::CopyAndNotify;
pub use copy_to_clipboard::CopyToClipboard;
pub use get_liked_posts::GetLikedPosts;
pub use save_liked_posts::SaveLikedPosts;
pub use toggle_liked_post::ToggleLikedPost;
