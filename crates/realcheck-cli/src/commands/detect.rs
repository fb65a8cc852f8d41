use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use realcheck_core::client::HttpClassifier;
use realcheck_core::error::RealcheckError;
use realcheck_core::interpret::DisplayResult;
use realcheck_core::io::is_image_path;
use realcheck_core::selection::SelectedImage;
use realcheck_core::session::DetectionSession;
use serde::Serialize;

use super::ServiceArgs;
use crate::summary;

#[derive(Args)]
pub struct DetectArgs {
    /// Image file to check
    pub file: PathBuf,

    #[command(flatten)]
    pub service: ServiceArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct DetectionReport<'a> {
    file: String,
    endpoint: &'a str,
    benchmark: String,
    accepted: bool,
    #[serde(flatten)]
    result: &'a DisplayResult,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let config = args.service.resolve()?;

    if !is_image_path(&args.file) {
        tracing::warn!(
            file = %args.file.display(),
            "file extension is not a known image type; sending anyway"
        );
    }
    let image = SelectedImage::load(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let classifier = HttpClassifier::from_config(&config)?;
    let mut session = DetectionSession::new(classifier);
    session.select(image);

    let spinner = if args.json {
        None
    } else {
        Some(analyzing_spinner(&config.endpoint)?)
    };
    let outcome = session.detect();
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match outcome {
        Ok(result) => {
            if args.json {
                let report = DetectionReport {
                    file: args.file.display().to_string(),
                    endpoint: &config.endpoint,
                    benchmark: result.benchmark(),
                    accepted: result.is_accepted(),
                    result,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                summary::print_result(Some(&args.file), result);
            }
            Ok(())
        }
        Err(RealcheckError::Transport(err)) => {
            summary::print_alert(&err.to_string());
            bail!("detection failed for {}", args.file.display())
        }
        Err(err) => Err(err.into()),
    }
}

fn analyzing_spinner(endpoint: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(format!("Analyzing... ({endpoint})"));
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
