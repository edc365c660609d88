//! # Configuration DTOs
//!
//! Data structures only. Reading files belongs to the infra layer;
//! this module maps an already-parsed TOML value onto [`SiteConfig`].

mod site_config;

pub use site_config::{SiteConfig, DEFAULT_BACKEND_URL, DEFAULT_LIKED_POSTS_KEY};
