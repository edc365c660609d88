//! Use case for copying text to the system clipboard

use std::sync::Arc;

use pk_core::ports::SystemClipboardPort;
use pk_core::CopyOutcome;
use tracing::{info, info_span, warn, Instrument};

/// Copies text to the system clipboard.
///
/// ## Behavior / 行为
/// - Awaits a single clipboard write; no timeout, no retry
/// - Any rejection becomes [`CopyOutcome::Failed`] carrying the text, so the
///   caller can offer it for manual copying
/// - Never returns an error
pub struct CopyToClipboard {
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl CopyToClipboard {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { clipboard }
    }

    pub async fn execute(&self, text: &str) -> CopyOutcome {
        let span = info_span!("usecase.copy_to_clipboard.execute", len = text.len());

        async {
            match self.clipboard.write_text(text).await {
                Ok(()) => {
                    info!("Text copied to clipboard");
                    CopyOutcome::Copied
                }
                Err(err) => {
                    warn!(error = %err, "Clipboard write rejected");
                    CopyOutcome::Failed {
                        text: text.to_string(),
                        reason: err.to_string(),
                    }
                }
            }
        }
        .instrument(span)
        .await
    }
}
