use realcheck_core::backdrop::snowfall;
use realcheck_core::config::BackdropConfig;

/// Opacity multiplier while an image is on screen.
const DIMMED_OPACITY: f32 = 0.35;
const FRAME_INTERVAL: std::time::Duration = std::time::Duration::from_millis(33);

/// Paint falling snow across `rect`. Fully visible on the empty screen and
/// faded behind a selected image.
pub fn paint(ui: &egui::Ui, rect: egui::Rect, config: &BackdropConfig, dimmed: bool) {
    if !config.enabled {
        return;
    }

    let fade = ui
        .ctx()
        .animate_bool(egui::Id::new("backdrop_dimmed"), dimmed);
    let opacity = 1.0 + (DIMMED_OPACITY - 1.0) * fade;

    let time = ui.input(|i| i.time);
    let [r, g, b] = config.color;
    let painter = ui.painter_at(rect);

    for flake in snowfall(config, rect.width(), rect.height(), time) {
        let alpha = (flake.alpha * opacity).clamp(0.0, 1.0);
        let color = egui::Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0) as u8);
        painter.circle_filled(
            rect.min + egui::vec2(flake.x, flake.y),
            flake.size * 0.5,
            color,
        );
    }

    ui.ctx().request_repaint_after(FRAME_INTERVAL);
}
