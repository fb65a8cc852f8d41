use std::sync::mpsc;
use std::time::Instant;

use realcheck_core::client::{Classifier, HttpClassifier};
use realcheck_core::selection::SelectedImage;

use crate::messages::WorkerResult;

use super::{send, send_log};

pub(super) fn handle_classify(
    classifier: Option<&HttpClassifier>,
    generation: u64,
    image: &SelectedImage,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let Some(classifier) = classifier else {
        send(
            tx,
            ctx,
            WorkerResult::ClassifyFailed {
                generation,
                message: "HTTP client is not available; check the endpoint setting".into(),
            },
        );
        return;
    };

    let start = Instant::now();
    let result = match classifier.classify(image) {
        Ok(response) => {
            send_log(
                tx,
                ctx,
                format!(
                    "Service answered in {:.0}ms (prediction {}, confidence {:.4})",
                    start.elapsed().as_secs_f64() * 1000.0,
                    i64::from(response.prediction),
                    response.confidence
                ),
            );
            WorkerResult::Classified {
                generation,
                response,
            }
        }
        Err(e) => {
            tracing::warn!(generation, "classification failed: {e}");
            let message = if e.is_timeout() {
                format!("Request to {} timed out", classifier.endpoint())
            } else {
                format!("Error detecting image: {e}")
            };
            WorkerResult::ClassifyFailed {
                generation,
                message,
            }
        }
    };
    send(tx, ctx, result);
}
