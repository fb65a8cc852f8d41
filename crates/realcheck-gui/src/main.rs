mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

use std::path::PathBuf;

use realcheck_core::config::AppConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_startup_config(std::env::args().nth(1).map(PathBuf::from));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("RealCheck"),
        ..Default::default()
    };

    eframe::run_native(
        "RealCheck",
        options,
        Box::new(move |cc| Ok(Box::new(app::RealcheckApp::new(&cc.egui_ctx, config)))),
    )
}

/// Optional TOML path from argv, then `REALCHECK_ENDPOINT`. Falls back to
/// defaults with a warning rather than refusing to start.
fn load_startup_config(path: Option<PathBuf>) -> AppConfig {
    let base = match path {
        Some(path) => AppConfig::read(&path).unwrap_or_else(|e| {
            tracing::warn!("ignoring config {}: {e}", path.display());
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };
    let config = base.apply_overrides_from(|key| std::env::var(key).ok());
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            tracing::warn!("ignoring invalid startup config: {e}");
            AppConfig::default()
        }
    }
}
