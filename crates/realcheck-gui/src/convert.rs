use realcheck_core::selection::PreviewImage;

/// Convert a decoded RGBA preview to an egui ColorImage.
pub fn preview_to_color_image(preview: &PreviewImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [preview.width as usize, preview.height as usize],
        &preview.rgba,
    )
}
