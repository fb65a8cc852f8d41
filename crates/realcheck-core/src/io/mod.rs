pub mod image_io;

pub use image_io::{decode_preview, is_image_path, load_selected_image, mime_for_path};
