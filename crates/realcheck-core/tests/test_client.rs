mod common;

use std::time::Duration;

use realcheck_core::client::{
    parse_response, Classifier, HttpClassifier, Prediction, TransportError,
};
use realcheck_core::config::AppConfig;
use realcheck_core::error::RealcheckError;

use common::{find, png_bytes, StubServer};
use realcheck_core::selection::SelectedImage;

const TIMEOUT: Duration = Duration::from_secs(5);

fn upload() -> SelectedImage {
    SelectedImage::from_bytes("cat.png", png_bytes(8, 8))
}

// ---------------------------------------------------------------------------
// Request shape
// ---------------------------------------------------------------------------

#[test]
fn test_posts_multipart_file_field() {
    let server = StubServer::respond_once(
        200,
        "application/json",
        r#"{"prediction": 1, "confidence": 0.93}"#,
    );
    let client = HttpClassifier::new(server.url.clone(), TIMEOUT).unwrap();
    let image = upload();

    let response = client.classify(&image).unwrap();
    assert_eq!(response.prediction, Prediction::Authentic);
    assert_eq!(response.confidence, 0.93);

    let request = server.request();
    let text = String::from_utf8_lossy(&request).to_string();
    assert!(text.starts_with("POST /predict HTTP/1.1"), "got: {text}");
    assert!(
        text.to_ascii_lowercase()
            .contains("content-type: multipart/form-data; boundary="),
        "got: {text}"
    );
    assert!(text.contains(r#"name="file""#), "got: {text}");
    assert!(text.contains(r#"filename="cat.png""#), "got: {text}");
    assert!(
        text.to_ascii_lowercase().contains("content-type: image/png"),
        "got: {text}"
    );
    assert!(
        find(&request, image.bytes()).is_some(),
        "image bytes missing from request body"
    );
}

#[test]
fn test_from_config_uses_configured_endpoint() {
    let server = StubServer::respond_once(
        200,
        "application/json",
        r#"{"prediction": 0, "confidence": 0.2}"#,
    );
    let config = AppConfig {
        endpoint: server.url.clone(),
        ..AppConfig::default()
    };
    let client = HttpClassifier::from_config(&config).unwrap();
    assert_eq!(client.endpoint(), server.url);

    let response = client.classify(&upload()).unwrap();
    assert_eq!(response.prediction, Prediction::Synthetic);
    server.request();
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[test]
fn test_error_status_is_transport_error() {
    let server = StubServer::respond_once(500, "text/plain", "boom");
    let client = HttpClassifier::new(server.url.clone(), TIMEOUT).unwrap();

    match client.classify(&upload()) {
        Err(TransportError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    server.request();
}

#[test]
fn test_non_json_body_is_transport_error() {
    let server = StubServer::respond_once(200, "text/html", "<html>oops</html>");
    let client = HttpClassifier::new(server.url.clone(), TIMEOUT).unwrap();
    assert!(matches!(
        client.classify(&upload()),
        Err(TransportError::Decode(_))
    ));
    server.request();
}

#[test]
fn test_missing_field_is_transport_error() {
    let server = StubServer::respond_once(200, "application/json", r#"{"prediction": 1}"#);
    let client = HttpClassifier::new(server.url.clone(), TIMEOUT).unwrap();
    assert!(matches!(
        client.classify(&upload()),
        Err(TransportError::Decode(_))
    ));
    server.request();
}

#[test]
fn test_connection_refused_is_network_error() {
    let client = HttpClassifier::new(StubServer::closed_url(), TIMEOUT).unwrap();
    let err = client.classify(&upload()).unwrap_err();
    assert!(matches!(err, TransportError::Network(_)), "got {err:?}");
    assert!(!err.is_timeout());
}

#[test]
fn test_silent_server_times_out() {
    let url = StubServer::silent(Duration::from_secs(3));
    let client = HttpClassifier::new(url, Duration::from_millis(300)).unwrap();
    let err = client.classify(&upload()).unwrap_err();
    assert!(err.is_timeout(), "got {err:?}");
}

#[test]
fn test_transport_error_converts_to_crate_error() {
    let err: RealcheckError = TransportError::Status {
        status: 502,
        body: String::new(),
    }
    .into();
    assert!(err.to_string().contains("HTTP 502"), "got: {err}");
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_plain_response() {
    let r = parse_response(r#"{"prediction": 0, "confidence": 0.1}"#).unwrap();
    assert_eq!(r.prediction, Prediction::Synthetic);
    assert_eq!(r.confidence, 0.1);
}

#[test]
fn test_parse_float_prediction() {
    let r = parse_response(r#"{"prediction": 1.0, "confidence": 0.7}"#).unwrap();
    assert_eq!(r.prediction, Prediction::Authentic);
}

#[test]
fn test_parse_ignores_extra_fields() {
    let r = parse_response(r#"{"prediction": 1, "confidence": 0.8, "model": "b0"}"#).unwrap();
    assert_eq!(r.confidence, 0.8);
}

#[test]
fn test_parse_rejects_non_numeric_string() {
    assert!(parse_response(r#"{"prediction": 1, "confidence": "high"}"#).is_err());
}

#[test]
fn test_parse_rejects_non_finite_string() {
    assert!(parse_response(r#"{"prediction": 1, "confidence": "NaN"}"#).is_err());
}

#[test]
fn test_parse_accepts_out_of_range_confidence() {
    let r = parse_response(r#"{"prediction": 1, "confidence": 1.5}"#).unwrap();
    assert_eq!(r.confidence, 1.5);
}
