use std::sync::Arc;

use tracing::debug;

use crate::client::ClassificationResponse;
use crate::interpret::interpret_response;
use crate::selection::SelectedImage;

use super::state::{Phase, ViewState};

/// Inputs to the state machine.
#[derive(Debug)]
pub enum Event {
    /// The user picked a file.
    SelectImage(SelectedImage),
    /// The user pressed Detect.
    Detect,
    /// A request finished with a parsed response.
    Classified {
        generation: u64,
        response: ClassificationResponse,
    },
    /// A request failed before producing a usable response.
    TransportFailed { generation: u64, message: String },
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Send `image` to the classifier, tagging the outcome with `generation`.
    Classify {
        generation: u64,
        image: Arc<SelectedImage>,
    },
    /// Show a blocking alert to the user.
    Alert { message: String },
}

/// Pure transition function.
pub fn reduce(state: ViewState, event: Event) -> (ViewState, Option<Effect>) {
    let ViewState { generation, phase } = state;

    match (phase, event) {
        // Selecting always wins and always clears the previous verdict.
        (_, Event::SelectImage(image)) => {
            let generation = generation + 1;
            debug!(generation, file = image.file_name(), "image selected");
            let next = ViewState {
                generation,
                phase: Phase::ImageSelected {
                    image: Arc::new(image),
                },
            };
            (next, None)
        }

        (Phase::ImageSelected { image }, Event::Detect) => {
            debug!(generation, "detection started");
            let effect = Effect::Classify {
                generation,
                image: Arc::clone(&image),
            };
            let next = ViewState {
                generation,
                phase: Phase::Analyzing { image },
            };
            (next, Some(effect))
        }

        (
            Phase::Analyzing { image },
            Event::Classified {
                generation: tag,
                response,
            },
        ) if tag == generation => {
            let result = interpret_response(&response);
            debug!(
                generation,
                label = ?result.label,
                confidence = %result.confidence_percent,
                "detection finished"
            );
            let next = ViewState {
                generation,
                phase: Phase::ResultShown { image, result },
            };
            (next, None)
        }

        (
            Phase::Analyzing { image },
            Event::TransportFailed {
                generation: tag,
                message,
            },
        ) if tag == generation => {
            debug!(generation, "detection failed: {message}");
            let next = ViewState {
                generation,
                phase: Phase::ImageSelected { image },
            };
            (next, Some(Effect::Alert { message }))
        }

        (phase, Event::Detect) => {
            debug!(generation, "detect ignored: no image or not ready");
            (ViewState { generation, phase }, None)
        }

        (phase, Event::Classified { generation: tag, .. })
        | (phase, Event::TransportFailed { generation: tag, .. }) => {
            debug!(
                current = generation,
                stale = tag,
                "discarding outcome for a superseded request"
            );
            (ViewState { generation, phase }, None)
        }
    }
}
