//! Synchronous driver for the view state machine.
//!
//! Runs each [`Effect`] inline on the calling thread. The CLI uses this; the
//! GUI runs the same controller but executes `Classify` on a worker thread.

use tracing::warn;

use crate::client::Classifier;
use crate::controller::{Controller, Effect, Event, ViewState};
use crate::error::{RealcheckError, Result};
use crate::interpret::DisplayResult;
use crate::selection::SelectedImage;

pub struct DetectionSession<C: Classifier> {
    classifier: C,
    controller: Controller,
}

impl<C: Classifier> DetectionSession<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            controller: Controller::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Replace the current selection, clearing any shown result.
    pub fn select(&mut self, image: SelectedImage) {
        self.controller.dispatch(Event::SelectImage(image));
    }

    /// Run one detection for the current selection.
    ///
    /// When a result is already shown this is a no-op and the existing result
    /// is returned. A transport failure returns the error after the state has
    /// gone back to `ImageSelected`, so `detect` may simply be called again.
    pub fn detect(&mut self) -> Result<&DisplayResult> {
        match self.controller.dispatch(Event::Detect) {
            Some(Effect::Classify { generation, image }) => {
                let event = match self.classifier.classify(&image) {
                    Ok(response) => Event::Classified {
                        generation,
                        response,
                    },
                    Err(err) => {
                        let message = err.to_string();
                        if let Some(Effect::Alert { message }) =
                            self.controller.dispatch(Event::TransportFailed {
                                generation,
                                message,
                            })
                        {
                            warn!("{message}");
                        }
                        return Err(RealcheckError::Transport(err));
                    }
                };
                self.controller.dispatch(event);
            }
            Some(Effect::Alert { .. }) | None => {}
        }

        self.controller
            .state()
            .result()
            .ok_or(RealcheckError::NoImageSelected)
    }
}
