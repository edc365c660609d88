use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is unavailable on this host.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backing data is corrupt.
    #[error("storage data corrupt: {0}")]
    Corrupt(String),

    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard on this host (headless session, missing display server).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard access denied: {0}")]
    PermissionDenied(String),

    #[error("clipboard write failed: {0}")]
    Other(String),
}
