use std::path::PathBuf;
use std::sync::Arc;

use realcheck_core::client::ClassificationResponse;
use realcheck_core::config::AppConfig;
use realcheck_core::selection::SelectedImage;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Send the image to the classification service. The outcome is tagged
    /// with `generation` so the UI can drop answers for older selections.
    Classify {
        generation: u64,
        image: Arc<SelectedImage>,
    },

    /// Rebuild the HTTP client for a new endpoint or timeout.
    Reconfigure { config: AppConfig },
}

/// Results sent back to the UI thread, from the worker or a dialog thread.
pub enum WorkerResult {
    /// A picked file was read.
    ImageLoaded { image: SelectedImage },
    ImageLoadFailed {
        path: PathBuf,
        message: String,
    },

    Classified {
        generation: u64,
        response: ClassificationResponse,
    },
    ClassifyFailed {
        generation: u64,
        message: String,
    },

    ConfigImported { config: AppConfig },
    Log { message: String },
}
