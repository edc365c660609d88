//! # pk-platform
//!
//! Implementations of the pk-core ports that talk to the operating system:
//! the system clipboard and the user notification surface.

pub mod clipboard;
pub mod notifier;

pub use clipboard::{ArboardClipboard, UnavailableClipboard};
pub use notifier::{ConsoleNotifier, TracingNotifier};
