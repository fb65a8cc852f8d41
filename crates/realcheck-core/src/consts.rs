/// Classification endpoint used when no config overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/predict";

/// Request timeout in seconds when no config overrides it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV_VAR: &str = "REALCHECK_ENDPOINT";

/// Multipart form field carrying the image bytes.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Minimum confidence in the predicted class before a verdict is accepted.
/// Anything below is reported as uncertain.
pub const CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Raw `prediction` value the service uses for camera-captured images.
pub const AUTHENTIC_PREDICTION: i64 = 1;

/// Longest preview edge in pixels. Larger images are downscaled for display only;
/// the upload always carries the original bytes.
pub const PREVIEW_MAX_DIMENSION: u32 = 1024;

/// File extensions offered by the image picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico", "avif",
];

/// Analysis text for an accepted camera-captured verdict.
pub const ANALYSIS_REAL: &str = "The image exhibits natural noise patterns, consistent color \
gradients, and lacks common AI artifacts such as unnatural textures or irregular edges. It is \
consistent with a natural camera-captured photograph.";

/// Analysis text for an accepted AI-generated verdict.
pub const ANALYSIS_AI_GENERATED: &str = "The image shows AI-generated patterns: possible texture \
inconsistencies, smoothness in regions where natural images have detail, and minor edge \
artifacts detected.";

/// Analysis text for a verdict below the confidence threshold.
pub const ANALYSIS_LOW_CONFIDENCE: &str = "Warning: the detector's confidence is below the \
acceptance threshold. This result is inconclusive and should be verified by other means.";

/// Headline shown above an accepted real verdict.
pub const BANNER_REAL: &str = "Great! This is a real image!";

/// Headline shown above an accepted AI-generated verdict.
pub const BANNER_AI_GENERATED: &str = "Warning! This is an AI image!";
