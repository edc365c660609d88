//! Clipboard copy outcome and the user-facing notices it renders to.

use serde::Serialize;

pub const COPY_SUCCESS_MESSAGE: &str = "Link copied to clipboard!";
pub const COPY_FAILURE_PREFIX: &str = "Copy failed. Please copy it manually: ";

/// Result of a clipboard write, as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CopyOutcome {
    Copied,
    /// The write was rejected; `text` is kept so the user can copy it by hand.
    Failed { text: String, reason: String },
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }

    pub fn notice(&self) -> Notice {
        match self {
            CopyOutcome::Copied => Notice::success(COPY_SUCCESS_MESSAGE),
            CopyOutcome::Failed { text, .. } => {
                Notice::failure(format!("{COPY_FAILURE_PREFIX}{text}"))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Failure,
}

/// Message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Failure,
            message: message.into(),
        }
    }
}
