use crate::clipboard::Notice;

/// User-facing notification surface (dialog, toast, console, log).
///
/// Called synchronously; implementations must not fail.
pub trait NotifierPort: Send + Sync {
    fn notify(&self, notice: &Notice);
}
