use std::path::Path;

use tracing::{debug, warn};

use crate::consts::{IMAGE_EXTENSIONS, PREVIEW_MAX_DIMENSION};
use crate::error::Result;
use crate::selection::{PreviewImage, SelectedImage};

/// Fallback MIME type for files whose extension is not a known image type.
const OCTET_STREAM: &str = "application/octet-stream";

/// Guess the MIME type from the file extension (case-insensitive).
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("tif" | "tiff") => "image/tiff",
        Some("ico") => "image/x-icon",
        Some("avif") => "image/avif",
        _ => OCTET_STREAM,
    }
}

/// True when the extension is one the image picker offers.
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// Decode image bytes into an RGBA preview no larger than
/// `PREVIEW_MAX_DIMENSION` on its longest edge.
pub fn decode_preview(bytes: &[u8]) -> Result<PreviewImage> {
    let img = image::load_from_memory(bytes)?;
    let img = if img.width() > PREVIEW_MAX_DIMENSION || img.height() > PREVIEW_MAX_DIMENSION {
        img.thumbnail(PREVIEW_MAX_DIMENSION, PREVIEW_MAX_DIMENSION)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PreviewImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Read a user-picked file into a [`SelectedImage`].
///
/// The picker's extension filter is the only type check. Bytes that fail to
/// decode still produce a selection, just without a preview, and are sent to
/// the service as-is.
pub fn load_selected_image(path: &Path) -> Result<SelectedImage> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());
    let mime = mime_for_path(path);

    let preview = match decode_preview(&bytes) {
        Ok(preview) => {
            debug!(
                file = %path.display(),
                width = preview.width,
                height = preview.height,
                "decoded preview"
            );
            Some(preview)
        }
        Err(e) => {
            warn!(file = %path.display(), "no preview available: {e}");
            None
        }
    };

    Ok(SelectedImage::new(
        Some(path.to_path_buf()),
        file_name,
        mime,
        bytes,
        preview,
    ))
}
