use realcheck_core::config::AppConfig;
use realcheck_core::controller::Event;
use realcheck_core::interpret::{DisplayResult, Label};

use crate::app::RealcheckApp;
use crate::panels::menu_bar::open_image;
use crate::panels::section_header;

const PANEL_WIDTH: f32 = 300.0;

pub fn show(ctx: &egui::Context, app: &mut RealcheckApp) {
    egui::SidePanel::left("controls")
        .resizable(false)
        .exact_width(PANEL_WIDTH)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.heading("RealCheck");
                    ui.label("Is this photo real or AI-generated?");
                });
                ui.add_space(12.0);

                image_section(ctx, ui, app);
                ui.separator();
                detect_section(ctx, ui, app);
                ui.separator();
                service_section(ui, app);
            });
        });
}

fn image_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut RealcheckApp) {
    section_header(ui, "Image", None);

    let state = app.controller.state();
    let button_text = if state.has_image() {
        "Change Image"
    } else {
        "Upload Image"
    };
    let info = state.image().map(|img| {
        (
            img.file_name().to_owned(),
            img.path().map(|p| p.display().to_string()),
            img.size_bytes(),
            img.mime(),
            img.preview().map(|p| (p.width, p.height)),
        )
    });

    if ui
        .add_sized([ui.available_width(), 28.0], egui::Button::new(button_text))
        .clicked()
    {
        open_image(ctx, app);
    }

    if let Some((name, path, size, mime, dims)) = info {
        ui.add_space(4.0);
        let name = ui.label(egui::RichText::new(name).strong());
        if let Some(path) = path {
            name.on_hover_text(path);
        }
        ui.small(format!("{} KiB, {mime}", size.div_ceil(1024)));
        if let Some((w, h)) = dims {
            ui.small(format!("Preview {w}x{h}"));
        }
    } else {
        ui.small("PNG, JPEG, WebP, GIF, BMP or TIFF");
    }
    ui.add_space(4.0);
}

fn detect_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut RealcheckApp) {
    let state = app.controller.state();
    section_header(ui, "Detection", Some(&state.kind().to_string()));

    let can_detect = state.can_detect();
    let analyzing = state.is_analyzing();
    let result = state.result().cloned();

    let mut clicked = false;
    ui.add_enabled_ui(can_detect, |ui| {
        ui.horizontal(|ui| {
            let text = if analyzing { "Analyzing..." } else { "Detect" };
            clicked = ui
                .add_sized([ui.available_width() - 24.0, 28.0], egui::Button::new(text))
                .clicked();
            if analyzing {
                ui.spinner();
            }
        });
    });
    if clicked {
        app.dispatch(ctx, Event::Detect);
    }

    if let Some(result) = result {
        ui.add_space(8.0);
        result_box(ui, &result);
    }
    ui.add_space(4.0);
}

fn label_color(label: Label) -> egui::Color32 {
    match label {
        Label::Real => egui::Color32::from_rgb(80, 200, 120),
        Label::AiGenerated => egui::Color32::from_rgb(230, 80, 80),
        Label::Uncertain => egui::Color32::from_rgb(230, 180, 60),
    }
}

fn result_box(ui: &mut egui::Ui, result: &DisplayResult) {
    let color = label_color(result.label);
    // Markers follow the verdict: only a real image gets the positive ones.
    let (rating_marker, report_marker) = if result.label == Label::Real {
        ("\u{2605}", "\u{2714}")
    } else {
        ("\u{26A0}", "\u{2716}")
    };

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        if let Some(banner) = result.banner() {
            ui.label(egui::RichText::new(banner).strong().color(color));
            ui.add_space(4.0);
        }
        ui.label(
            egui::RichText::new(result.label.to_string())
                .size(18.0)
                .strong()
                .color(color),
        );
        ui.label(format!("Confidence: {}%", result.confidence_percent));
        ui.add(egui::ProgressBar::new(result.final_confidence.clamp(0.0, 1.0) as f32));

        ui.add_space(6.0);
        ui.strong("Benchmark Rating");
        ui.label(format!("{rating_marker} {}", result.benchmark()));

        ui.add_space(6.0);
        ui.strong("Analysis Report");
        ui.label(format!("{report_marker} {}", result.analysis_text));
    });
}

fn service_section(ui: &mut egui::Ui, app: &mut RealcheckApp) {
    section_header(ui, "Service", Some(&format!("{}s timeout", app.config.timeout_secs)));

    ui.label("Endpoint");
    let edit = ui.add(
        egui::TextEdit::singleline(&mut app.ui_state.endpoint_input)
            .desired_width(f32::INFINITY)
            .hint_text(realcheck_core::consts::DEFAULT_ENDPOINT),
    );
    let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    let changed = app.ui_state.endpoint_input.trim() != app.config.endpoint;
    let apply = ui
        .add_enabled(changed, egui::Button::new("Apply"))
        .clicked();

    if changed && (apply || submitted) {
        let config = AppConfig {
            endpoint: app.ui_state.endpoint_input.trim().to_owned(),
            ..app.config.clone()
        };
        app.apply_config(config);
    }
}
