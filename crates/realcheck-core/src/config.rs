use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ENDPOINT_ENV_VAR};
use crate::error::{RealcheckError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Full URL of the classification endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub backdrop: BackdropConfig,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            backdrop: BackdropConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config = Self::parse_toml_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse without validating, for callers that layer more overrides on top.
    pub fn parse_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| RealcheckError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse `path` without validating.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading config");
        Self::parse_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RealcheckError::Config(e.to_string()))
    }

    /// Apply `REALCHECK_ENDPOINT` from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply environment-style overrides from an arbitrary lookup, then
    /// validate.
    pub fn with_overrides_from(self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = self.apply_overrides_from(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Apply environment-style overrides without validating. Blank values
    /// are ignored.
    pub fn apply_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup(ENDPOINT_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            debug!(%endpoint, "endpoint overridden from {ENDPOINT_ENV_VAR}");
            self.endpoint = endpoint.trim().to_string();
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| RealcheckError::Config(format!("endpoint {:?}: {e}", self.endpoint)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RealcheckError::Config(format!(
                "endpoint {:?}: scheme must be http or https",
                self.endpoint
            )));
        }
        if self.timeout_secs == 0 {
            return Err(RealcheckError::Config(
                "timeout_secs must be at least 1".into(),
            ));
        }
        self.backdrop.validate()
    }
}

/// Cosmetic settings for the falling-snow backdrop. Nothing here affects
/// detection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub enabled: bool,
    /// Flake color, RGB.
    pub color: [u8; 3],
    /// Flake edge length in points.
    pub flake_size: f32,
    /// Smallest flake as a fraction of `flake_size`.
    pub min_flake_scale: f32,
    /// Flakes per 10,000 square points.
    pub density: f32,
    /// Fall speed in points per second.
    pub speed: f32,
    /// Fall direction in degrees; 90 is straight down.
    pub direction_deg: f32,
    /// Peak flake opacity in [0, 1].
    pub brightness: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: [0xb3, 0xe0, 0xff],
            flake_size: 4.0,
            min_flake_scale: 0.35,
            density: 0.32,
            speed: 40.0,
            direction_deg: 120.0,
            brightness: 0.8,
        }
    }
}

impl BackdropConfig {
    pub fn validate(&self) -> Result<()> {
        if self.flake_size.is_nan() || self.flake_size <= 0.0 {
            return Err(RealcheckError::Config("backdrop.flake_size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.min_flake_scale) {
            return Err(RealcheckError::Config(
                "backdrop.min_flake_scale must be in [0, 1]".into(),
            ));
        }
        if self.density < 0.0 || self.speed < 0.0 {
            return Err(RealcheckError::Config(
                "backdrop.density and backdrop.speed must not be negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.brightness) {
            return Err(RealcheckError::Config("backdrop.brightness must be in [0, 1]".into()));
        }
        Ok(())
    }
}
