pub mod config;
pub mod fs;
pub mod storage;

pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
