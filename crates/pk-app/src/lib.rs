//! pagekit application layer
//!
//! Use cases orchestrating the ports declared in `pk-core`.

pub mod deps;
pub mod usecases;

#[cfg(test)]
mod mocks;

pub use deps::AppDeps;
pub use usecases::{
    ClearLikedPosts, CopyAndNotify, CopyToClipboard, GetLikedPosts, SaveLikedPosts, ToggleLikedPost,
};
