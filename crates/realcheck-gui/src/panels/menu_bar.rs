use realcheck_core::config::AppConfig;
use realcheck_core::consts::IMAGE_EXTENSIONS;
use realcheck_core::selection::SelectedImage;

use crate::app::RealcheckApp;
use crate::messages::WorkerResult;

pub fn show(ctx: &egui::Context, app: &mut RealcheckApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_image(ctx, app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Service Defaults").clicked() {
                    ui.close();
                    let defaults = AppConfig {
                        backdrop: app.config.backdrop.clone(),
                        ..AppConfig::default()
                    };
                    app.apply_config(defaults);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_image(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Pick an image and read it off the UI thread. Cancelling leaves the current
/// selection untouched.
pub(crate) fn open_image(ctx: &egui::Context, app: &RealcheckApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };

        let result = match SelectedImage::load(&path) {
            Ok(image) => WorkerResult::ImageLoaded { image },
            Err(e) => WorkerResult::ImageLoadFailed {
                path,
                message: e.to_string(),
            },
        };
        let _ = result_tx.send(result);
        ctx.request_repaint();
    });
}

fn import_config(ctx: &egui::Context, app: &RealcheckApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };

        let result = match AppConfig::load(&path) {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Log {
                message: format!("ERROR: cannot import {}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(result);
        ctx.request_repaint();
    });
}

fn export_config(app: &mut RealcheckApp) {
    let content = match app.config.to_toml_string() {
        Ok(content) => content,
        Err(e) => {
            app.ui_state.add_log(format!("ERROR: cannot export config: {e}"));
            return;
        }
    };

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("realcheck.toml")
            .save_file()
        {
            if let Err(e) = std::fs::write(&path, content) {
                tracing::error!("failed to write {}: {e}", path.display());
            }
        }
    });
}
