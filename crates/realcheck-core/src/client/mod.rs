//! Classification client: the service contract and the transport behind it.
//!
//! The service answers `POST <endpoint>` (multipart field `file`) with
//! `{ "prediction": 0 | 1, "confidence": <probability of "authentic"> }`.

mod http;
mod response;

pub use http::HttpClassifier;
pub use response::{parse_response, ClassificationResponse, Prediction};

use thiserror::Error;

use crate::selection::SelectedImage;

/// Anything that stops a classification request from producing a usable
/// response. All of these surface to the user the same way: one alert.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response is not a valid classification: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

/// Port to the remote classification service.
///
/// One call is one request; implementations do not retry.
pub trait Classifier: Send {
    fn classify(&self, image: &SelectedImage) -> Result<ClassificationResponse, TransportError>;
}

impl<C: Classifier + Sync + ?Sized> Classifier for &C {
    fn classify(&self, image: &SelectedImage) -> Result<ClassificationResponse, TransportError> {
        (**self).classify(image)
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn classify(&self, image: &SelectedImage) -> Result<ClassificationResponse, TransportError> {
        (**self).classify(image)
    }
}
