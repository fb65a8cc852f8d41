//! Turns the service's raw probability into what the user sees.

use serde::Serialize;

use crate::client::{ClassificationResponse, Prediction};
use crate::consts::{
    ANALYSIS_AI_GENERATED, ANALYSIS_LOW_CONFIDENCE, ANALYSIS_REAL, BANNER_AI_GENERATED,
    BANNER_REAL, CONFIDENCE_THRESHOLD,
};

/// Verdict shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Label {
    Real,
    AiGenerated,
    Uncertain,
}

impl Label {
    /// Word used in the benchmark rating line.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Real => "Real",
            Self::AiGenerated => "Fake",
            Self::Uncertain => "Uncertain",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real => write!(f, "Real (Camera-captured)"),
            Self::AiGenerated => write!(f, "AI-generated"),
            Self::Uncertain => write!(f, "Uncertain"),
        }
    }
}

/// Everything the renderer needs for one verdict.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayResult {
    pub label: Label,
    /// Confidence in the predicted class, in [0, 1] for in-range input.
    pub final_confidence: f64,
    /// `final_confidence * 100` with two decimals, e.g. `"95.00"`.
    pub confidence_percent: String,
    pub analysis_text: &'static str,
}

impl DisplayResult {
    /// Benchmark rating line, e.g. `"95.00% Real"`.
    pub fn benchmark(&self) -> String {
        format!("{}% {}", self.confidence_percent, self.label.short_name())
    }

    pub fn is_accepted(&self) -> bool {
        self.label != Label::Uncertain
    }

    /// Headline for an accepted verdict. `None` when uncertain.
    pub fn banner(&self) -> Option<&'static str> {
        match self.label {
            Label::Real => Some(BANNER_REAL),
            Label::AiGenerated => Some(BANNER_AI_GENERATED),
            Label::Uncertain => None,
        }
    }
}

/// Confidence in whichever class was predicted.
///
/// `confidence` is the probability of the authentic class, so a synthetic
/// prediction is scored by its complement.
pub fn final_confidence(prediction: Prediction, confidence: f64) -> f64 {
    let prob_real = confidence;
    let prob_fake = 1.0 - prob_real;
    match prediction {
        Prediction::Authentic => prob_real,
        Prediction::Synthetic => prob_fake,
    }
}

/// Map a prediction and the authentic-class probability to a verdict.
///
/// Scores below `CONFIDENCE_THRESHOLD` are `Uncertain` regardless of class.
pub fn interpret(prediction: Prediction, confidence: f64) -> DisplayResult {
    let final_confidence = final_confidence(prediction, confidence);
    let confidence_percent = format!("{:.2}", final_confidence * 100.0);

    let (label, analysis_text) =
        if final_confidence.is_nan() || final_confidence < CONFIDENCE_THRESHOLD {
            (Label::Uncertain, ANALYSIS_LOW_CONFIDENCE)
        } else if prediction == Prediction::Authentic {
            (Label::Real, ANALYSIS_REAL)
        } else {
            (Label::AiGenerated, ANALYSIS_AI_GENERATED)
        };

    DisplayResult {
        label,
        final_confidence,
        confidence_percent,
        analysis_text,
    }
}

/// Convenience wrapper over [`interpret`].
pub fn interpret_response(response: &ClassificationResponse) -> DisplayResult {
    interpret(response.prediction, response.confidence)
}
