//! Configuration loading and validation for the appwatch daemon.

use std::path::{Path, PathBuf};
use std::time::Duration;

use probe::ProbeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found in search paths")]
    FileNotFound,

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON in configuration file: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

/// Main configuration structure, read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Endpoint URLs to probe, in order
    #[validate(custom = "validate_endpoints")]
    pub endpoints: Vec<String>,

    /// Seconds to wait between cycle completions
    #[serde(default = "default_check_interval")]
    #[validate(range(min = 1))]
    pub check_interval: u64,

    /// Response time ceiling in seconds before a success is flagged slow
    #[serde(default = "default_warn_threshold")]
    #[validate(range(min = 0.0))]
    pub warn_threshold: f64,

    /// Maximum probe attempts per endpoint per cycle
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Chat webhook to page on error-class outcomes; alerts go to the
    /// log stream when unset
    #[serde(default)]
    #[validate(custom = "validate_endpoint_url")]
    pub webhook_url: Option<String>,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Logging settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: Option<String>,
    pub format: Option<String>,
}

fn default_check_interval() -> u64 {
    300
}

fn default_warn_threshold() -> f64 {
    3.0
}

fn default_retries() -> u32 {
    3
}

// Custom validators

fn validate_endpoints(endpoints: &[String]) -> Result<(), ValidationError> {
    if endpoints.is_empty() {
        return Err(ValidationError::new("endpoints_empty"));
    }

    for endpoint in endpoints {
        validate_endpoint_url(endpoint)?;
    }

    Ok(())
}

fn validate_endpoint_url(url: &str) -> Result<(), ValidationError> {
    let parsed = reqwest::Url::parse(url).map_err(|_| ValidationError::new("invalid_url"))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ValidationError::new("invalid_url"));
    }
    Ok(())
}

// Configuration loading implementation

impl Config {
    /// Load configuration from default search paths.
    ///
    /// Unlike optional service settings, the endpoint list has no usable
    /// default, so a missing file is an error rather than a fallback.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(&path)
            }
            None => Err(ConfigError::FileNotFound),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/appwatch/appwatch.json")];

        if let Some(home_path) = Self::home_config_path() {
            paths.push(home_path);
        }

        paths.push(PathBuf::from("./appwatch.json"));

        paths
            .into_iter()
            .find(|p: &PathBuf| p.exists() && p.is_file())
    }

    /// Get home directory config path
    fn home_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config/appwatch/appwatch.json"))
    }

    /// Convert to the engine's validated configuration record
    pub fn to_probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            endpoints: self.endpoints.clone(),
            check_interval: Duration::from_secs(self.check_interval),
            warn_threshold: Duration::from_secs_f64(self.warn_threshold),
            retries: self.retries,
        }
    }
}
