use std::sync::mpsc;

use realcheck_core::client::HttpClassifier;
use realcheck_core::config::AppConfig;

use crate::messages::{WorkerCommand, WorkerResult};

use super::classify;

/// Spawn the worker thread. Returns the command sender.
///
/// The worker owns the HTTP client and handles one command at a time, so at
/// most one classification request is ever in flight.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    config: AppConfig,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("realcheck-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, config);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

fn build_classifier(
    config: &AppConfig,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) -> Option<HttpClassifier> {
    match HttpClassifier::from_config(config) {
        Ok(classifier) => Some(classifier),
        Err(e) => {
            tracing::error!("failed to build HTTP client: {e}");
            send_log(tx, ctx, format!("ERROR: HTTP client unavailable: {e}"));
            None
        }
    }
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    config: AppConfig,
) {
    let mut classifier = build_classifier(&config, &tx, &ctx);

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Classify { generation, image } => {
                classify::handle_classify(classifier.as_ref(), generation, &image, &tx, &ctx);
            }
            WorkerCommand::Reconfigure { config } => {
                classifier = build_classifier(&config, &tx, &ctx);
            }
        }
    }
}
