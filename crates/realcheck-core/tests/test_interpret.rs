use approx::assert_abs_diff_eq;
use realcheck_core::client::{ClassificationResponse, Prediction};
use realcheck_core::consts::{
    ANALYSIS_AI_GENERATED, ANALYSIS_LOW_CONFIDENCE, ANALYSIS_REAL, BANNER_AI_GENERATED,
    BANNER_REAL, CONFIDENCE_THRESHOLD,
};
use realcheck_core::interpret::{final_confidence, interpret, interpret_response, Label};

// ---------------------------------------------------------------------------
// Reference cases
// ---------------------------------------------------------------------------

#[test]
fn test_confident_authentic_is_real() {
    let r = interpret(Prediction::Authentic, 0.95);
    assert_eq!(r.label, Label::Real);
    assert_eq!(r.confidence_percent, "95.00");
    assert_eq!(r.analysis_text, ANALYSIS_REAL);
}

#[test]
fn test_synthetic_with_high_authentic_probability_is_uncertain() {
    let r = interpret(Prediction::Synthetic, 0.95);
    assert_abs_diff_eq!(r.final_confidence, 0.05, epsilon = 1e-12);
    assert_eq!(r.label, Label::Uncertain);
    assert_eq!(r.confidence_percent, "5.00");
    assert_eq!(r.analysis_text, ANALYSIS_LOW_CONFIDENCE);
}

#[test]
fn test_coin_flip_authentic_is_uncertain() {
    let r = interpret(Prediction::Authentic, 0.5);
    assert_eq!(r.label, Label::Uncertain);
    assert_eq!(r.confidence_percent, "50.00");
}

#[test]
fn test_confident_synthetic_is_ai_generated() {
    let r = interpret(Prediction::Synthetic, 0.1);
    assert_abs_diff_eq!(r.final_confidence, 0.9, epsilon = 1e-12);
    assert_eq!(r.label, Label::AiGenerated);
    assert_eq!(r.confidence_percent, "90.00");
    assert_eq!(r.analysis_text, ANALYSIS_AI_GENERATED);
}

// ---------------------------------------------------------------------------
// Threshold boundary
// ---------------------------------------------------------------------------

#[test]
fn test_threshold_is_inclusive() {
    let r = interpret(Prediction::Authentic, CONFIDENCE_THRESHOLD);
    assert_eq!(r.label, Label::Real);
    assert_eq!(r.confidence_percent, "60.00");
}

#[test]
fn test_just_below_threshold_is_uncertain() {
    let r = interpret(Prediction::Authentic, 0.5999);
    assert_eq!(r.label, Label::Uncertain);
    assert_eq!(r.confidence_percent, "59.99");
}

#[test]
fn test_nan_confidence_is_uncertain() {
    let r = interpret(Prediction::Authentic, f64::NAN);
    assert_eq!(r.label, Label::Uncertain);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn test_final_confidence_stays_in_unit_interval() {
    for step in 0..=1000 {
        let confidence = step as f64 / 1000.0;
        for prediction in [Prediction::Synthetic, Prediction::Authentic] {
            let f = final_confidence(prediction, confidence);
            assert!((0.0..=1.0).contains(&f), "{prediction} {confidence} -> {f}");
        }
    }
}

#[test]
fn test_interpret_is_idempotent() {
    for &(p, c) in &[
        (Prediction::Authentic, 0.95),
        (Prediction::Synthetic, 0.95),
        (Prediction::Authentic, 0.5),
        (Prediction::Synthetic, 0.1),
    ] {
        assert_eq!(interpret(p, c), interpret(p, c));
    }
}

#[test]
fn test_interpret_response_matches_interpret() {
    let response = ClassificationResponse::new(Prediction::Synthetic, 0.2);
    assert_eq!(
        interpret_response(&response),
        interpret(Prediction::Synthetic, 0.2)
    );
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_benchmark_line() {
    assert_eq!(interpret(Prediction::Authentic, 0.95).benchmark(), "95.00% Real");
    assert_eq!(interpret(Prediction::Synthetic, 0.1).benchmark(), "90.00% Fake");
    assert_eq!(
        interpret(Prediction::Authentic, 0.5).benchmark(),
        "50.00% Uncertain"
    );
}

#[test]
fn test_label_display() {
    assert_eq!(Label::Real.to_string(), "Real (Camera-captured)");
    assert_eq!(Label::AiGenerated.to_string(), "AI-generated");
    assert_eq!(Label::Uncertain.to_string(), "Uncertain");
}

#[test]
fn test_is_accepted() {
    assert!(interpret(Prediction::Authentic, 0.95).is_accepted());
    assert!(interpret(Prediction::Synthetic, 0.0).is_accepted());
    assert!(!interpret(Prediction::Synthetic, 0.7).is_accepted());
}

#[test]
fn test_banner_only_for_accepted_verdicts() {
    assert_eq!(interpret(Prediction::Authentic, 0.95).banner(), Some(BANNER_REAL));
    assert_eq!(
        interpret(Prediction::Synthetic, 0.1).banner(),
        Some(BANNER_AI_GENERATED)
    );
    assert_eq!(interpret(Prediction::Authentic, 0.5).banner(), None);
}
