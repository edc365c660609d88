use pk_core::ports::NotifierPort;
use pk_core::{Notice, NoticeLevel};
use tracing::{info, warn};

/// Records notices in the log instead of showing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotifierPort for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => info!(target: "pagekit::notice", "{}", notice.message),
            NoticeLevel::Failure => warn!(target: "pagekit::notice", "{}", notice.message),
        }
    }
}
