//! File candidates and content-type classification
//!
//! A [`FileCandidate`] is what a picker or drop hands the engine: name,
//! declared type and size, readable without materializing content.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::OutputKey;

/// Content types rendered inside the embedded frame
pub const FRAME_TYPES: &[&str] = &["application/pdf", "text/html"];

/// Where a candidate's bytes live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "at", rename_all = "lowercase")]
pub enum Location {
    Path(PathBuf),
    Url(String),
}

/// A file offered for loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileCandidate {
    pub name: String,
    /// Declared MIME type; `None` when the host could not tell
    pub content_type: Option<String>,
    pub size: u64,
    pub last_modified: Option<DateTime<Utc>>,
    pub location: Location,
}

impl FileCandidate {
    /// Describe a file on disk without reading it
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)
            .map_err(|e| Error::file_read(path, e.to_string()))?;
        if !metadata.is_file() {
            return Err(Error::file_read(path, "not a regular file"));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            content_type: guess_content_type(path).map(str::to_string),
            size: metadata.len(),
            last_modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            location: Location::Path(path.to_path_buf()),
        })
    }

    /// A pseudo-candidate standing for a page loaded by address
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            name: url.clone(),
            content_type: Some("text/html".to_string()),
            size: 0,
            last_modified: None,
            location: Location::Url(url),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            Location::Path(p) => Some(p),
            Location::Url(_) => None,
        }
    }

    /// The declared type, empty when absent
    pub fn type_label(&self) -> &str {
        self.content_type.as_deref().unwrap_or("")
    }

    /// Which view renders this candidate
    pub fn view(&self) -> OutputKey {
        classify(self.content_type.as_deref())
    }
}

/// Map a declared content type to the view that renders it.
///
/// Document/markup types go to the frame; otherwise the top-level category
/// picks `image`, `audio` or `video`; everything else, including no type at
/// all, is text.
pub fn classify(content_type: Option<&str>) -> OutputKey {
    let Some(content_type) = content_type else {
        return OutputKey::Text;
    };
    if FRAME_TYPES.contains(&content_type) {
        return OutputKey::Frame;
    }
    let Some((category, _)) = content_type.split_once('/') else {
        return OutputKey::Text;
    };
    match category.to_ascii_lowercase().as_str() {
        "image" => OutputKey::Image,
        "audio" => OutputKey::Audio,
        "video" => OutputKey::Video,
        _ => OutputKey::Text,
    }
}

/// Guess a MIME type from a file extension, the way a browser declares one.
pub fn guess_content_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "txt" | "log" | "text" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "csv" => "text/csv",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "htm" | "html" => "text/html",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "ico" => "image/vnd.microsoft.icon",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "ogv" => "video/ogg",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        _ => return None,
    };
    Some(mime)
}
