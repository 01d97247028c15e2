//! Configuration loading for scorecard.
//!
//! Supports loading configuration from TOML files, with sensible defaults
//! for all settings.

use anyhow::{Context, Result};
use scorecard_core::Thresholds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for scorecard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings for significance classification.
    pub significance: SignificanceConfig,
    /// Settings for cell evaluation orchestration.
    pub orchestration: OrchestrationConfig,
    /// Settings for the document store.
    pub store: StoreConfig,
    /// Settings for dashboard notification.
    pub notify: NotifyConfig,
    /// Settings for the job server.
    pub server: ServerConfig,
}

/// Configuration for significance classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignificanceConfig {
    /// p-value level for a major (magnitude 2) score.
    pub major_threshold: f64,
    /// p-value level for a minor (magnitude 1) score.
    pub minor_threshold: f64,
}

/// Configuration for cell evaluation orchestration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestrationConfig {
    /// Number of cells evaluated concurrently. Sized to the downstream
    /// store's connection limits, not to the engine.
    pub workers: usize,
}

/// Configuration for the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Root directory holding scorecard documents.
    pub root: PathBuf,
}

/// Configuration for dashboard notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// URL of the dashboard to notify after a batch completes. Not
    /// notifying anyone is the default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
    /// Timeout in milliseconds for the notification request.
    pub timeout_ms: u64,
}

/// Configuration for the job server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port for the job-submission HTTP server.
    pub port: u16,
}

impl Default for SignificanceConfig {
    fn default() -> Self {
        Self {
            major_threshold: 0.01,
            minor_threshold: 0.05,
        }
    }
}

impl SignificanceConfig {
    /// The configured levels as an engine threshold pair.
    ///
    /// # Panics
    /// Panics if the configured levels violate the threshold invariants
    /// (outside (0, 0.5), or major above minor).
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.major_threshold, self.minor_threshold)
    }
}

impl Default for OrchestrationConfig {
    fn default() -> Self {
        Self { workers: 4 }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./documents"),
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            dashboard_url: None,
            timeout_ms: 5_000,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 9200 }
    }
}

/// Default configuration file name.
const DEFAULT_CONFIG_FILE: &str = ".scorecard.toml";

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from the default file (`.scorecard.toml`) or use defaults.
    ///
    /// This function searches for the configuration file in the current directory.
    /// If the file doesn't exist, default configuration is returned.
    /// If the file exists but cannot be parsed, an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be parsed.
    pub fn load_or_default() -> Result<Config> {
        let path = Path::new(DEFAULT_CONFIG_FILE);

        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from the specified path, or try default locations.
    ///
    /// If a path is provided, loads from that path.
    /// Otherwise, tries to load from `.scorecard.toml` or uses defaults.
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the specified file cannot be read or parsed.
    pub fn load_from(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(p) => Self::load(p),
            None => Self::load_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.significance.major_threshold, 0.01);
        assert_eq!(config.significance.minor_threshold, 0.05);
        assert_eq!(config.orchestration.workers, 4);
        assert_eq!(config.store.root, PathBuf::from("./documents"));
        assert!(config.notify.dashboard_url.is_none());
        assert_eq!(config.notify.timeout_ms, 5_000);
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn test_thresholds_from_config() {
        let thresholds = Config::default().significance.thresholds();
        assert_eq!(thresholds.major, 0.01);
        assert_eq!(thresholds.minor, 0.05);
    }

    #[test]
    #[should_panic(expected = "major threshold must not exceed minor")]
    fn test_inverted_thresholds_rejected() {
        let config = SignificanceConfig {
            major_threshold: 0.05,
            minor_threshold: 0.01,
        };
        config.thresholds();
    }

    #[test]
    fn test_load_partial_config() {
        let toml_content = r#"
[significance]
major_threshold = 0.005

[orchestration]
workers = 16
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();

        // Overridden values
        assert_eq!(config.significance.major_threshold, 0.005);
        assert_eq!(config.orchestration.workers, 16);

        // Default values
        assert_eq!(config.significance.minor_threshold, 0.05);
        assert_eq!(config.notify.timeout_ms, 5_000);
    }

    #[test]
    fn test_load_full_config() {
        let toml_content = r#"
[significance]
major_threshold = 0.005
minor_threshold = 0.025

[orchestration]
workers = 8

[store]
root = "/var/lib/scorecard/documents"

[notify]
dashboard_url = "http://dashboard.example:8080/refresh"
timeout_ms = 10000

[server]
port = 8000
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.significance.major_threshold, 0.005);
        assert_eq!(config.significance.minor_threshold, 0.025);
        assert_eq!(config.orchestration.workers, 8);
        assert_eq!(config.store.root, PathBuf::from("/var/lib/scorecard/documents"));
        assert_eq!(
            config.notify.dashboard_url.as_deref(),
            Some("http://dashboard.example:8080/refresh")
        );
        assert_eq!(config.notify.timeout_ms, 10000);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"this is not valid toml {{{{").unwrap();

        let result = Config::load(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(
            config.significance.major_threshold,
            parsed.significance.major_threshold
        );
        assert_eq!(config.orchestration.workers, parsed.orchestration.workers);
        assert_eq!(config.store.root, parsed.store.root);
        assert_eq!(config.server.port, parsed.server.port);
    }
}
