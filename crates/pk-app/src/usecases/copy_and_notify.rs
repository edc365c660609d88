//! Copy text, then tell the user how it went

use std::sync::Arc;

use pk_core::ports::NotifierPort;
use pk_core::CopyOutcome;

use super::CopyToClipboard;

/// Runs [`CopyToClipboard`] and surfaces the outcome through one
/// synchronous notification.
///
/// ## Messages / 消息
/// - Copied: [`pk_core::clipboard::COPY_SUCCESS_MESSAGE`]
/// - Failed: [`pk_core::clipboard::COPY_FAILURE_PREFIX`] followed by the text
pub struct CopyAndNotify {
    copy: CopyToClipboard,
    notifier: Arc<dyn NotifierPort>,
}

impl CopyAndNotify {
    pub fn new(copy: CopyToClipboard, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { copy, notifier }
    }

    pub async fn execute(&self, text: &str) -> CopyOutcome {
        let outcome = self.copy.execute(text).await;
        self.notifier.notify(&outcome.notice());
        outcome
    }
}
