use crate::app::RealcheckApp;

/// Blocking notice for a failed classification request. The workflow has
/// already returned to `ImageSelected`; dismissing only clears the message.
pub fn show(ctx: &egui::Context, app: &mut RealcheckApp) {
    let Some(message) = app.ui_state.alert.as_deref() else {
        return;
    };

    let mut dismissed = false;
    let modal = egui::Modal::new(egui::Id::new("transport_alert")).show(ctx, |ui| {
        ui.set_width(360.0);
        ui.heading("Detection failed");
        ui.add_space(6.0);
        ui.label(message);
        ui.add_space(10.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    if dismissed || modal.should_close() {
        app.ui_state.alert = None;
    }
}
