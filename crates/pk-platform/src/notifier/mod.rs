//! Notifier adapters
//!
//! - `console` - prints the notice for a terminal user
//! - `tracing` - records the notice as a log event only

mod console;
mod tracing_notifier;

pub use console::ConsoleNotifier;
pub use tracing_notifier::TracingNotifier;
