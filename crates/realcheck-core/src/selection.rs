use std::path::{Path, PathBuf};

/// Decoded preview pixels, RGBA8, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// The single image the user picked, together with its local preview.
///
/// The bytes are uploaded untouched; the preview is display-only and is
/// `None` when the bytes could not be decoded locally.
#[derive(Clone, Debug)]
pub struct SelectedImage {
    path: Option<PathBuf>,
    file_name: String,
    mime: &'static str,
    bytes: Vec<u8>,
    preview: Option<PreviewImage>,
}

impl SelectedImage {
    pub fn new(
        path: Option<PathBuf>,
        file_name: impl Into<String>,
        mime: &'static str,
        bytes: Vec<u8>,
        preview: Option<PreviewImage>,
    ) -> Self {
        Self {
            path,
            file_name: file_name.into(),
            mime,
            bytes,
            preview,
        }
    }

    /// Build a selection from in-memory bytes, guessing the MIME type from
    /// `file_name` and decoding a preview when possible.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = crate::io::mime_for_path(Path::new(&file_name));
        let preview = crate::io::decode_preview(&bytes).ok();
        Self::new(None, file_name, mime, bytes, preview)
    }

    /// Read an image from disk. See [`crate::io::load_selected_image`].
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        crate::io::load_selected_image(path)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn preview(&self) -> Option<&PreviewImage> {
        self.preview.as_ref()
    }
}
