//! Embed URL templates.
//!
//! Maps a content-type tag and an identifier to the URL (or relative path)
//! an iframe should be pointed at. Identifiers are substituted verbatim:
//! no escaping, no existence check.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Content types that have an embed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedKind {
    /// Google Docs document
    Docs,
    /// Google Slides presentation
    Slide,
    /// Image stored on Drive
    Img,
    /// PDF stored on Drive
    Pdf,
    /// Google Sheets spreadsheet
    Spreadsheet,
    /// Local HTML file under `contents/html`; the id is the file name
    Html,
    /// Drive folder
    Folder,
}

impl EmbedKind {
    pub const ALL: [EmbedKind; 7] = [
        EmbedKind::Docs,
        EmbedKind::Slide,
        EmbedKind::Img,
        EmbedKind::Pdf,
        EmbedKind::Spreadsheet,
        EmbedKind::Html,
        EmbedKind::Folder,
    ];

    /// Canonical lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedKind::Docs => "docs",
            EmbedKind::Slide => "slide",
            EmbedKind::Img => "img",
            EmbedKind::Pdf => "pdf",
            EmbedKind::Spreadsheet => "spreadsheet",
            EmbedKind::Html => "html",
            EmbedKind::Folder => "folder",
        }
    }

    /// Case-insensitive tag lookup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(tag))
    }

    /// Build the embed URL for `id`.
    pub fn embed_url(&self, id: &str) -> String {
        match self {
            EmbedKind::Docs => format!("https://docs.google.com/document/d/{id}/preview"),
            EmbedKind::Slide => format!(
                "https://docs.google.com/presentation/d/{id}/embed?start=false&loop=false&delayms=3000"
            ),
            EmbedKind::Img | EmbedKind::Pdf => {
                format!("https://drive.google.com/file/d/{id}/preview")
            }
            EmbedKind::Spreadsheet => {
                format!("https://docs.google.com/spreadsheets/d/{id}/htmlembed")
            }
            EmbedKind::Html => format!("contents/html/{id}"),
            EmbedKind::Folder => {
                format!("https://drive.google.com/embeddedfolderview?id={id}#grid")
            }
        }
    }

    /// Whether the URL is expected to render inside an iframe.
    ///
    /// Drive's framing policy (X-Frame-Options) usually blocks the folder view,
    /// so folder URLs work better as a direct link opened in a new tab.
    pub fn is_frame_embeddable(&self) -> bool {
        !matches!(self, EmbedKind::Folder)
    }
}

impl fmt::Display for EmbedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown embed type: {0}")]
pub struct UnknownEmbedKind(pub String);

impl FromStr for EmbedKind {
    type Err = UnknownEmbedKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownEmbedKind(s.to_string()))
    }
}

/// Build the embed URL for an untyped tag.
///
/// Unrecognized tags yield an empty string rather than an error.
pub fn build_embed_url(tag: &str, id: &str) -> String {
    EmbedKind::from_tag(tag)
        .map(|kind| kind.embed_url(id))
        .unwrap_or_default()
}
