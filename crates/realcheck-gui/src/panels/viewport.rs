use crate::app::RealcheckApp;
use crate::panels::backdrop;

const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 20.0;
/// Gap kept between the fitted preview and the panel edge.
const FIT_MARGIN: f32 = 16.0;

pub fn show(ctx: &egui::Context, app: &mut RealcheckApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);
        backdrop::paint(
            ui,
            rect,
            &app.config.backdrop,
            app.controller.state().has_image(),
        );

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), [t.size()[0] as f32, t.size()[1] as f32]));

        if let Some((texture_id, tex_size)) = texture_info {
            let image_size = resolve_image_size(app, tex_size);
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            handle_zoom(ui, &response, app, rect);
            handle_pan(&response, app);

            if response.double_clicked() {
                app.viewport.zoom = 1.0;
                app.viewport.pan_offset = egui::Vec2::ZERO;
            }

            let img_rect = compute_img_rect(rect, image_size, app);
            draw_image(ui, texture_id, img_rect);
        } else if app.controller.state().has_image() {
            show_placeholder(ui, "No preview available");
        } else {
            show_placeholder(ui, "Upload an image to begin");
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_rgb(12, 18, 32));
}

fn resolve_image_size(app: &RealcheckApp, tex_size: [f32; 2]) -> egui::Vec2 {
    if let Some(size) = app.viewport.image_size {
        egui::vec2(size[0] as f32, size[1] as f32)
    } else {
        egui::vec2(tex_size[0], tex_size[1])
    }
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut RealcheckApp, rect: egui::Rect) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }

    let zoom_factor = (scroll_delta * 0.005).exp();
    let new_zoom = (app.viewport.zoom * zoom_factor).clamp(MIN_ZOOM, MAX_ZOOM);

    // Zoom toward mouse cursor
    if let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) {
        let center = rect.center().to_vec2() + app.viewport.pan_offset;
        let mouse_rel = mouse_pos.to_vec2() - center;
        let scale_change = new_zoom / app.viewport.zoom;
        app.viewport.pan_offset += mouse_rel * (1.0 - scale_change);
    }

    app.viewport.zoom = new_zoom;
}

fn handle_pan(response: &egui::Response, app: &mut RealcheckApp) {
    if response.dragged_by(egui::PointerButton::Primary)
        || response.dragged_by(egui::PointerButton::Middle)
    {
        app.viewport.pan_offset += response.drag_delta();
    }
}

/// Scale at which the whole image fits inside `rect`, never enlarging.
fn fit_scale(image_size: egui::Vec2, rect: egui::Rect) -> f32 {
    let available = (rect.size() - egui::Vec2::splat(FIT_MARGIN * 2.0)).max(egui::Vec2::splat(1.0));
    (available.x / image_size.x)
        .min(available.y / image_size.y)
        .min(1.0)
}

fn compute_img_rect(rect: egui::Rect, image_size: egui::Vec2, app: &RealcheckApp) -> egui::Rect {
    let scaled = image_size * fit_scale(image_size, rect) * app.viewport.zoom;
    let center = rect.center() + app.viewport.pan_offset;
    egui::Rect::from_center_size(center, scaled)
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(160)),
        );
    });
}
