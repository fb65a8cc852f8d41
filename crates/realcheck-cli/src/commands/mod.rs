pub mod config;
pub mod detect;
pub mod interpret;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use realcheck_core::config::AppConfig;

/// Where to find the classification service.
#[derive(Args)]
pub struct ServiceArgs {
    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Classification endpoint URL (overrides config and REALCHECK_ENDPOINT)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl ServiceArgs {
    /// Defaults, then the config file, then the environment, then flags.
    /// Validation runs once on the merged result.
    pub fn resolve(&self) -> Result<AppConfig> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<AppConfig> {
        let config = match self.config {
            Some(ref path) => AppConfig::read(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => AppConfig::default(),
        };
        let mut config = config.apply_overrides_from(lookup);

        if let Some(ref endpoint) = self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        config.validate().context("Invalid service settings")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "http://127.0.0.1:9000/predict";

    fn args(config: Option<PathBuf>, endpoint: Option<&str>) -> ServiceArgs {
        ServiceArgs {
            config,
            endpoint: endpoint.map(str::to_string),
            timeout: None,
        }
    }

    fn bad_env(_: &str) -> Option<String> {
        Some("not a url".to_string())
    }

    #[test]
    fn test_endpoint_flag_beats_bad_env() {
        let config = args(None, Some(GOOD)).resolve_with(bad_env).unwrap();
        assert_eq!(config.endpoint, GOOD);
    }

    #[test]
    fn test_endpoint_flag_beats_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "endpoint = \"not a url\"\ntimeout_secs = 7\n").unwrap();

        let config = args(Some(path), Some(GOOD)).resolve_with(|_| None).unwrap();
        assert_eq!(config.endpoint, GOOD);
        assert_eq!(config.timeout_secs, 7);
    }

    #[test]
    fn test_env_beats_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("realcheck.toml");
        std::fs::write(&path, "endpoint = \"http://file.example/predict\"\n").unwrap();

        let config = args(Some(path), None)
            .resolve_with(|_| Some(GOOD.to_string()))
            .unwrap();
        assert_eq!(config.endpoint, GOOD);
    }

    #[test]
    fn test_bad_env_without_flag_is_rejected() {
        assert!(args(None, None).resolve_with(bad_env).is_err());
    }

    #[test]
    fn test_timeout_flag_beats_zero_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("realcheck.toml");
        std::fs::write(&path, "timeout_secs = 0\n").unwrap();

        let config = ServiceArgs {
            timeout: Some(5),
            ..args(Some(path), None)
        }
        .resolve_with(|_| None)
        .unwrap();
        assert_eq!(config.timeout_secs, 5);
    }
}
