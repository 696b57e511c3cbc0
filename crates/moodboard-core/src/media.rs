//! Media resolution: turning uploaded files into stable displayable refs.
//!
//! The engine stores media as opaque `MediaRef` strings inside
//! [`ItemKind`](crate::item::ItemKind); the sources here produce those refs
//! but never validate content beyond format sniffing.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Opaque, stable, displayable reference to resolved media.
pub type MediaRef = String;

/// Media errors.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("unsupported media format: {0}")]
    UnsupportedFormat(String),
    #[error("io error: {0}")]
    Io(String),
}

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Known media formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaFormat {
    Png,
    Jpeg,
    WebP,
    Gif,
    Mp4,
    WebM,
}

impl MediaFormat {
    /// Get the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaFormat::Png => "image/png",
            MediaFormat::Jpeg => "image/jpeg",
            MediaFormat::WebP => "image/webp",
            MediaFormat::Gif => "image/gif",
            MediaFormat::Mp4 => "video/mp4",
            MediaFormat::WebM => "video/webm",
        }
    }

    /// Canonical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaFormat::Png => "png",
            MediaFormat::Jpeg => "jpg",
            MediaFormat::WebP => "webp",
            MediaFormat::Gif => "gif",
            MediaFormat::Mp4 => "mp4",
            MediaFormat::WebM => "webm",
        }
    }

    /// Whether this format is a video container.
    pub fn is_video(&self) -> bool {
        matches!(self, MediaFormat::Mp4 | MediaFormat::WebM)
    }

    /// Detect format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(MediaFormat::Png),
            "jpg" | "jpeg" => Some(MediaFormat::Jpeg),
            "webp" => Some(MediaFormat::WebP),
            "gif" => Some(MediaFormat::Gif),
            "mp4" | "m4v" => Some(MediaFormat::Mp4),
            "webm" => Some(MediaFormat::WebM),
            _ => None,
        }
    }

    /// Detect format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(MediaFormat::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(MediaFormat::Jpeg);
        }

        // GIF: "GIF8"
        if data.starts_with(b"GIF8") {
            return Some(MediaFormat::Gif);
        }

        // WebP: RIFF....WEBP
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(MediaFormat::WebP);
        }

        // MP4: "ftyp" box at offset 4
        if data.len() >= 8 && &data[4..8] == b"ftyp" {
            return Some(MediaFormat::Mp4);
        }

        // WebM/Matroska: EBML header 1A 45 DF A3
        if data.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]) {
            return Some(MediaFormat::WebM);
        }

        None
    }

    /// Detect from content first, falling back to the file name's extension.
    pub fn detect(name: &str, data: &[u8]) -> Option<Self> {
        Self::from_magic_bytes(data).or_else(|| {
            let ext = name.rsplit('.').next()?;
            Self::from_extension(ext)
        })
    }
}

/// Converts a raw uploaded file into a stable reference usable in an item.
pub trait MediaSource: Send + Sync {
    /// Resolve a file (name + bytes) to a displayable reference.
    fn resolve(&self, name: &str, data: &[u8]) -> MediaResult<MediaRef>;
}

/// Inline `data:` URL refs; nothing is written anywhere.
#[derive(Debug, Default)]
pub struct DataUrlSource;

impl DataUrlSource {
    pub fn new() -> Self {
        Self
    }
}

impl MediaSource for DataUrlSource {
    fn resolve(&self, name: &str, data: &[u8]) -> MediaResult<MediaRef> {
        let format = MediaFormat::detect(name, data)
            .ok_or_else(|| MediaError::UnsupportedFormat(name.to_string()))?;
        Ok(format!(
            "data:{};base64,{}",
            format.mime_type(),
            STANDARD.encode(data)
        ))
    }
}

/// Writes media files under a directory; refs are the stored paths.
pub struct FileMediaSource {
    base_path: PathBuf,
}

impl FileMediaSource {
    /// Create a file media source, creating the directory if needed.
    pub fn new(base_path: PathBuf) -> MediaResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(|e| MediaError::Io(format!("failed to create media directory: {}", e)))?;
        }
        Ok(Self { base_path })
    }

    /// Get the base path.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn stored_name(name: &str, format: MediaFormat) -> String {
        let stem = name
            .rsplit('/')
            .next()
            .unwrap_or(name)
            .trim_end_matches(&format!(".{}", format.extension()));
        let safe_stem: String = stem
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}-{}.{}", safe_stem, Uuid::new_v4(), format.extension())
    }
}

impl MediaSource for FileMediaSource {
    fn resolve(&self, name: &str, data: &[u8]) -> MediaResult<MediaRef> {
        let format = MediaFormat::detect(name, data)
            .ok_or_else(|| MediaError::UnsupportedFormat(name.to_string()))?;
        let path = self.base_path.join(Self::stored_name(name, format));
        fs::write(&path, data)
            .map_err(|e| MediaError::Io(format!("failed to write {}: {}", path.display(), e)))?;
        Ok(path.display().to_string())
    }
}
