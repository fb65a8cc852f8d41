/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Preview size in pixels.
    pub image_size: Option<[usize; 2]>,
    /// Selection generation the texture was built for.
    pub generation: u64,
    /// Zoom relative to fit-to-window.
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            image_size: None,
            generation: 0,
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
        }
    }
}

impl ViewportState {
    /// Drop the texture and reset zoom and pan.
    pub fn clear(&mut self, generation: u64) {
        *self = Self {
            generation,
            ..Self::default()
        };
    }
}
