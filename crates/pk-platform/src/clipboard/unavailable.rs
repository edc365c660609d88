use async_trait::async_trait;
use pk_core::ports::{ClipboardError, SystemClipboardPort};

/// Clipboard for hosts without one. Every write is rejected.
#[derive(Debug, Clone)]
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl SystemClipboardPort for UnavailableClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(self.reason.clone()))
    }
}
