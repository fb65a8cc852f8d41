use std::sync::mpsc;

use realcheck_core::config::AppConfig;
use realcheck_core::controller::{Controller, Effect, Event, PhaseKind};

use crate::convert::preview_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::workers;

pub struct RealcheckApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    /// Kept so dialog threads can report back on the same channel as the worker.
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub controller: Controller,
    pub config: AppConfig,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl RealcheckApp {
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone(), config.clone());

        let ui_state = UIState {
            endpoint_input: config.endpoint.clone(),
            ..UIState::default()
        };

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            controller: Controller::new(),
            config,
            ui_state,
            viewport: ViewportState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker and dialog threads.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { image } => {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({} KiB)",
                        image.file_name(),
                        image.size_bytes().div_ceil(1024)
                    ));
                    if image.preview().is_none() {
                        self.ui_state
                            .add_log("No preview available for this file".into());
                    }
                    self.dispatch(ctx, Event::SelectImage(image));
                }
                WorkerResult::ImageLoadFailed { path, message } => {
                    self.ui_state
                        .add_log(format!("ERROR: cannot open {}: {message}", path.display()));
                }
                WorkerResult::Classified {
                    generation,
                    response,
                } => {
                    self.dispatch(
                        ctx,
                        Event::Classified {
                            generation,
                            response,
                        },
                    );
                }
                WorkerResult::ClassifyFailed {
                    generation,
                    message,
                } => {
                    self.dispatch(
                        ctx,
                        Event::TransportFailed {
                            generation,
                            message,
                        },
                    );
                }
                WorkerResult::ConfigImported { config } => {
                    self.apply_config(config);
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Feed one event through the controller and run the resulting effect.
    pub fn dispatch(&mut self, ctx: &egui::Context, event: Event) {
        let before = self.controller.state().kind();
        let effect = self.controller.dispatch(event);
        self.sync_viewport(ctx);

        match effect {
            Some(Effect::Classify { generation, image }) => {
                self.ui_state
                    .add_log(format!("Analyzing {}...", image.file_name()));
                self.send_command(WorkerCommand::Classify { generation, image });
            }
            Some(Effect::Alert { message }) => {
                self.ui_state.add_log(format!("ERROR: {message}"));
                self.ui_state.alert = Some(message);
            }
            None => {}
        }

        if before == PhaseKind::Analyzing {
            if let Some(result) = self.controller.state().result() {
                let line = format!("Result: {} ({}%)", result.label, result.confidence_percent);
                self.ui_state.add_log(line);
            }
        }
    }

    /// Rebuild the preview texture when the selection changed.
    fn sync_viewport(&mut self, ctx: &egui::Context) {
        let state = self.controller.state();
        if self.viewport.generation == state.generation() {
            return;
        }

        self.viewport.clear(state.generation());
        if let Some(preview) = state.image().and_then(|img| img.preview()) {
            let image = preview_to_color_image(preview);
            let size = image.size;
            let texture = ctx.load_texture("preview", image, egui::TextureOptions::LINEAR);
            self.viewport.texture = Some(texture);
            self.viewport.image_size = Some(size);
        }
    }

    /// Replace the active config and hand the new endpoint to the worker.
    pub fn apply_config(&mut self, config: AppConfig) {
        if let Err(e) = config.validate() {
            self.ui_state.add_log(format!("ERROR: config rejected: {e}"));
            return;
        }
        self.ui_state.endpoint_input = config.endpoint.clone();
        self.ui_state
            .add_log(format!("Endpoint: {}", config.endpoint));
        self.send_command(WorkerCommand::Reconfigure {
            config: config.clone(),
        });
        self.config = config;
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for RealcheckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::alert::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About RealCheck")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("RealCheck");
                        ui.label("AI-based Image Authenticity Detection");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
