mod arboard_clipboard;
mod unavailable;

pub use arboard_clipboard::ArboardClipboard;
pub use unavailable::UnavailableClipboard;
