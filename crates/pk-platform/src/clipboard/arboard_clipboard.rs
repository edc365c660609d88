use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pk_core::ports::{ClipboardError, SystemClipboardPort};
use tokio::task::spawn_blocking;
use tracing::debug;

/// System clipboard backed by `arboard`.
///
/// The context is kept for the adapter's lifetime: on X11/Wayland the
/// owning process serves the clipboard contents.
///
/// ## Hold / 保持
/// On Linux the text disappears when the process exits unless a clipboard
/// manager has taken it over. With a non-zero hold, `write_text` blocks until
/// another client owns the selection or the hold elapses, whichever comes
/// first. Other platforms copy the text into the OS and ignore the hold.
pub struct ArboardClipboard {
    inner: Arc<Mutex<arboard::Clipboard>>,
    hold: Duration,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = arboard::Clipboard::new().map_err(map_arboard_error)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(clipboard)),
            hold: Duration::ZERO,
        })
    }

    pub fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }
}

#[async_trait]
impl SystemClipboardPort for ArboardClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let inner = self.inner.clone();
        let text = text.to_string();
        let hold = self.hold;

        spawn_blocking(move || {
            let mut clipboard = inner
                .lock()
                .map_err(|_| ClipboardError::Other("clipboard lock poisoned".to_string()))?;
            set_text(&mut clipboard, text, hold).map_err(map_arboard_error)
        })
        .await
        .map_err(|e| ClipboardError::Other(format!("clipboard task failed: {e}")))??;

        debug!("arboard set_text succeeded");
        Ok(())
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: String,
    hold: Duration,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold.is_zero() {
        return clipboard.set_text(text);
    }
    debug!(hold_ms = hold.as_millis() as u64, "Serving clipboard until taken over");
    clipboard
        .set()
        .wait_until(std::time::Instant::now() + hold)
        .text(text)
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: String,
    _hold: Duration,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

fn map_arboard_error(err: arboard::Error) -> ClipboardError {
    match err {
        arboard::Error::ClipboardNotSupported => {
            ClipboardError::Unavailable("clipboard not supported on this host".to_string())
        }
        arboard::Error::ClipboardOccupied => {
            ClipboardError::PermissionDenied("clipboard occupied by another process".to_string())
        }
        other => ClipboardError::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            map_arboard_error(arboard::Error::ClipboardNotSupported),
            ClipboardError::Unavailable(_)
        ));
        assert!(matches!(
            map_arboard_error(arboard::Error::ClipboardOccupied),
            ClipboardError::PermissionDenied(_)
        ));
        assert!(matches!(
            map_arboard_error(arboard::Error::ContentNotAvailable),
            ClipboardError::Other(_)
        ));
    }

    #[tokio::test]
    #[ignore = "needs a desktop session with a clipboard"]
    async fn test_write_text_on_real_clipboard() {
        let clipboard = ArboardClipboard::new().unwrap();
        clipboard.write_text("pagekit clipboard test").await.unwrap();
    }

    #[tokio::test]
    #[ignore = "needs a desktop session with a clipboard"]
    async fn test_write_text_with_hold_returns_by_deadline() {
        let clipboard = ArboardClipboard::new()
            .unwrap()
            .with_hold(Duration::from_millis(200));
        let started = std::time::Instant::now();

        clipboard.write_text("pagekit hold test").await.unwrap();

        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
