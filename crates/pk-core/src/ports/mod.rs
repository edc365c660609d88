//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the adapters that
//! talk to the host: persistent key-value storage, the system clipboard and
//! the user notification surface.

pub mod clipboard;
pub mod errors;
pub mod notifier;
pub mod storage;

pub use clipboard::SystemClipboardPort;
pub use errors::{ClipboardError, StorageError};
pub use notifier::NotifierPort;
pub use storage::KeyValueStorePort;
