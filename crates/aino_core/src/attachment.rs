//! Media attachments staged for upload.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Broad media classification, derived from the file extension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    /// JPEG, PNG, or WebP still image
    Image,
    /// MP4, MOV, or AVI video
    Video,
}

impl MediaKind {
    /// Classify a path by extension. Unsupported extensions yield `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "webp" => Some(MediaKind::Image),
            "mp4" | "mov" | "avi" => Some(MediaKind::Video),
            _ => None,
        }
    }

    /// MIME type transmitted with the upload part.
    pub fn mime(&self, path: &Path) -> String {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match (self, ext.as_str()) {
            (MediaKind::Image, "png") => "image/png".to_string(),
            (MediaKind::Image, "webp") => "image/webp".to_string(),
            (MediaKind::Image, _) => "image/jpeg".to_string(),
            (MediaKind::Video, "mov") => "video/quicktime".to_string(),
            (MediaKind::Video, "avi") => "video/x-msvideo".to_string(),
            (MediaKind::Video, _) => "video/mp4".to_string(),
        }
    }
}

/// A file the user staged for the generation request.
///
/// Attachments are held by reference (path), not loaded into memory; the
/// client reads the bytes when the request is transmitted. Removing an
/// attachment from the draft drops it and whatever it owns.
///
/// # Examples
///
/// ```
/// use aino_core::{Attachment, MediaKind};
///
/// let att = Attachment::from_path("photos/press.jpg").unwrap();
/// assert_eq!(*att.kind(), MediaKind::Image);
/// assert_eq!(att.file_name(), "press.jpg");
///
/// assert!(Attachment::from_path("notes.txt").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Attachment {
    /// Stable identifier for removal from the draft
    id: Uuid,
    /// Location of the file on disk
    path: PathBuf,
    /// Media classification
    kind: MediaKind,
    /// Size in bytes, when known
    size_bytes: Option<u64>,
}

impl Attachment {
    /// Stage a file, classifying it by extension.
    ///
    /// Returns `None` for unsupported file types.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let kind = MediaKind::from_path(&path)?;
        let size_bytes = std::fs::metadata(&path).ok().map(|m| m.len());
        Some(Self {
            id: Uuid::new_v4(),
            path,
            kind,
            size_bytes,
        })
    }

    /// File name component of the path, for display and upload naming.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("attachment")
    }

    /// MIME type for the upload part.
    pub fn mime(&self) -> String {
        self.kind.mime(&self.path)
    }
}
