//! Clipboard port - abstracts the host's asynchronous clipboard write

use async_trait::async_trait;

use super::errors::ClipboardError;

#[async_trait]
pub trait SystemClipboardPort: Send + Sync {
    /// Write plain text to the system clipboard.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
