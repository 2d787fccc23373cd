/// File encoder
///
/// Turns a picked image file into:
/// - a data URL for previewing
/// - a base64 payload tagged with its media type, for the wire

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::ImageFormat;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Extensions offered by the file picker
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Used when neither the extension nor the content identifies the file
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Could not read {path}: {reason}")]
    Read { path: PathBuf, reason: String },
}

/// A base64 payload plus its declared media type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub media_type: String,
    pub data: String,
}

/// A user-selected image.
///
/// Replaced wholesale on re-selection, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    file_name: String,
    media_type: String,
    bytes: Arc<[u8]>,
    preview_url: String,
}

impl ImageSelection {
    /// Build a selection from bytes already in memory
    pub fn from_bytes(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let media_type = media_type.into();
        let preview_url = to_data_url(&media_type, &bytes);
        Self {
            file_name: file_name.into(),
            media_type,
            bytes: bytes.into(),
            preview_url,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Data URL suitable for immediate display
    pub fn preview_url(&self) -> &str {
        &self.preview_url
    }

    /// Transport form: the preview's payload with the `data:...,` prefix stripped
    pub fn encoded(&self) -> EncodedImage {
        EncodedImage {
            media_type: self.media_type.clone(),
            data: strip_data_url_prefix(&self.preview_url).to_string(),
        }
    }
}

/// Read an image file from disk into a selection
pub async fn load_selection(path: PathBuf) -> Result<ImageSelection, EncodeError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| EncodeError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let media_type = media_type_for(&path, &bytes);
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    tracing::debug!(
        file = %file_name,
        media_type = %media_type,
        size = bytes.len(),
        "Loaded image selection"
    );

    Ok(ImageSelection::from_bytes(file_name, media_type, bytes))
}

/// `data:<media type>;base64,<payload>`
pub fn to_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, BASE64.encode(bytes))
}

/// Everything after the first comma of a data URL.
///
/// Input without a comma yields an empty string rather than an error.
pub fn strip_data_url_prefix(data_url: &str) -> &str {
    data_url
        .split_once(',')
        .map(|(_, payload)| payload)
        .unwrap_or("")
}

/// Resolve the media type from the extension, then from the content itself
pub fn media_type_for(path: &Path, bytes: &[u8]) -> String {
    let from_extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .and_then(|ext| ImageFormat::from_extension(ext));

    from_extension
        .or_else(|| image::guess_format(bytes).ok())
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string())
}
