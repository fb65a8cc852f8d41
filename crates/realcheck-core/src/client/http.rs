use std::time::{Duration, Instant};

use reqwest::blocking::{multipart, Client};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::consts::UPLOAD_FIELD_NAME;
use crate::error::Result;
use crate::selection::SelectedImage;

use super::{parse_response, ClassificationResponse, Classifier, TransportError};

/// Blocking HTTP client for the classification endpoint.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: Client,
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::from)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Classifier for HttpClassifier {
    fn classify(
        &self,
        image: &SelectedImage,
    ) -> std::result::Result<ClassificationResponse, TransportError> {
        let part = multipart::Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime())?;
        let form = multipart::Form::new().part(UPLOAD_FIELD_NAME, part);

        info!(
            endpoint = %self.endpoint,
            file = image.file_name(),
            bytes = image.size_bytes(),
            "sending classification request"
        );
        let start = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .inspect_err(|e| warn!("classification request failed: {e}"))?;

        let status = response.status();
        let body = response.text()?;
        debug!(%status, elapsed = ?start.elapsed(), "classification response received");

        if !status.is_success() {
            warn!(%status, "classification service returned an error status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }
}
