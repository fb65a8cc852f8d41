use serde::{Deserialize, Serialize};

use crate::consts::AUTHENTIC_PREDICTION;

use super::TransportError;

/// The service's verdict class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "i64")]
pub enum Prediction {
    /// `prediction == 0`: machine-generated.
    Synthetic,
    /// `prediction == 1`: camera-captured.
    Authentic,
}

impl Prediction {
    /// Only the exact authentic value counts as authentic; every other value
    /// falls through to synthetic.
    pub fn from_raw(raw: f64) -> Self {
        if raw == AUTHENTIC_PREDICTION as f64 {
            Self::Authentic
        } else {
            Self::Synthetic
        }
    }
}

impl From<Prediction> for i64 {
    fn from(p: Prediction) -> Self {
        match p {
            Prediction::Synthetic => 0,
            Prediction::Authentic => AUTHENTIC_PREDICTION,
        }
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Synthetic => write!(f, "synthetic"),
            Self::Authentic => write!(f, "authentic"),
        }
    }
}

/// Parsed service response. `confidence` is always the probability of the
/// authentic class, whatever `prediction` says.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawResponse")]
pub struct ClassificationResponse {
    pub prediction: Prediction,
    pub confidence: f64,
}

impl ClassificationResponse {
    pub fn new(prediction: Prediction, confidence: f64) -> Self {
        Self {
            prediction,
            confidence,
        }
    }
}

/// JSON numbers or numeric strings; the service contract is loose about which.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LenientNumber {
    fn to_f64(&self, field: &str) -> Result<f64, String> {
        match self {
            Self::Int(v) => Ok(*v as f64),
            Self::Float(v) => Ok(*v),
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("{field} is not numeric: {s:?}")),
        }
    }
}

#[derive(Deserialize)]
struct RawResponse {
    prediction: LenientNumber,
    confidence: LenientNumber,
}

impl TryFrom<RawResponse> for ClassificationResponse {
    type Error = String;

    fn try_from(raw: RawResponse) -> Result<Self, Self::Error> {
        let prediction = Prediction::from_raw(raw.prediction.to_f64("prediction")?);
        let confidence = raw.confidence.to_f64("confidence")?;
        if !confidence.is_finite() {
            return Err(format!("confidence is not finite: {confidence}"));
        }
        Ok(Self {
            prediction,
            confidence,
        })
    }
}

/// Parse a response body. Missing fields, non-numeric values and non-JSON
/// bodies are all transport failures.
pub fn parse_response(body: &str) -> Result<ClassificationResponse, TransportError> {
    let response: ClassificationResponse = serde_json::from_str(body)?;
    if !(0.0..=1.0).contains(&response.confidence) {
        tracing::warn!(
            confidence = response.confidence,
            "service reported confidence outside [0, 1]"
        );
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_from_raw_only_exact_one_is_authentic() {
        assert_eq!(Prediction::from_raw(1.0), Prediction::Authentic);
        assert_eq!(Prediction::from_raw(0.0), Prediction::Synthetic);
        assert_eq!(Prediction::from_raw(2.0), Prediction::Synthetic);
        assert_eq!(Prediction::from_raw(0.99), Prediction::Synthetic);
    }

    #[test]
    fn test_prediction_serializes_as_integer() {
        let json = serde_json::to_string(&ClassificationResponse::new(Prediction::Authentic, 0.5))
            .unwrap();
        assert_eq!(json, r#"{"prediction":1,"confidence":0.5}"#);
    }

    #[test]
    fn test_numeric_string_is_coerced() {
        let r = parse_response(r#"{"prediction": "0", "confidence": " 0.25 "}"#).unwrap();
        assert_eq!(r.prediction, Prediction::Synthetic);
        assert_eq!(r.confidence, 0.25);
    }
}
