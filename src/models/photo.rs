//! Profile image handling.
//!
//! Images never leave the process: a picked file is read into memory and
//! carried on the record as raw bytes plus a base64 data URI preview.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{AppError, Result};

/// Largest accepted image file, in bytes.
const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Counter for unique preview URIs, so the UI image cache never serves a
/// stale bitmap after a photo is replaced.
static NEXT_PREVIEW_ID: AtomicU64 = AtomicU64::new(1);

/// An in-memory profile image.
#[derive(Debug, Clone)]
pub struct ProfileImage {
    bytes: Arc<[u8]>,
    mime: &'static str,
    uri: String,
}

impl ProfileImage {
    /// Wrap already-decoded image bytes.
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>, mime: &'static str) -> Self {
        let id = NEXT_PREVIEW_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            bytes: bytes.into(),
            mime,
            uri: format!("bytes://photo-{id}"),
        }
    }

    /// Read an image file from disk.
    ///
    /// Runs on a background task; the UI must not block on it.
    pub async fn load(path: &Path) -> Result<Self> {
        let mime = mime_for_path(path)
            .ok_or_else(|| AppError::image(format!("Unsupported image type: {}", path.display())))?;

        let meta = tokio::fs::metadata(path).await?;
        if meta.len() > MAX_IMAGE_BYTES {
            return Err(AppError::image(format!(
                "Image exceeds {} MB limit",
                MAX_IMAGE_BYTES / (1024 * 1024)
            )));
        }

        let bytes = tokio::fs::read(path).await?;
        Ok(Self::from_bytes(bytes, mime))
    }

    /// Raw image bytes, shareable with the UI image loader.
    pub fn bytes(&self) -> Arc<[u8]> {
        self.bytes.clone()
    }

    /// Unique URI keying this image in the UI's texture cache.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Inline `data:` URI preview of the image.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Map a file extension to its MIME type. Unknown extensions are rejected.
fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
