//! Configuration schema types
//!
//! This module defines the configuration structure for waktusolat. Every
//! section has defaults, so an empty file (or no file at all) is valid.

use crate::domain::{Period, ZoneCode};
use serde::{Deserialize, Serialize};

/// Main waktusolat configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaktuConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// e-solat API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// What to fetch when no flags are given
    #[serde(default)]
    pub request: RequestConfig,

    /// Where to write CSV files
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WaktuConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.api.validate()?;
        self.request.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Retry configuration
///
/// Backoff is linear: the wait after failed attempt `n` is
/// `n * base_delay_ms`, with no cap and no jitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total number of attempts, including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Base backoff delay in milliseconds
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

impl RetryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("api.retry.max_attempts must be >= 1".to_string());
        }
        Ok(())
    }
}

/// e-solat API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the e-solat endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `r` routing query parameter
    #[serde(default = "default_route")]
    pub route: String,

    /// Per-attempt timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Retry configuration
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            route: default_route(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
            retry: RetryConfig::default(),
        }
    }
}

impl ApiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("api.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }

        if self.route.trim().is_empty() {
            return Err("api.route cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("api.timeout_seconds must be > 0".to_string());
        }

        self.retry.validate()
    }
}

/// Default request parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// JAKIM zone code
    #[serde(default = "default_zone")]
    pub zone: String,

    /// Period mode (week, month, year, duration)
    #[serde(default)]
    pub period: Period,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            zone: default_zone(),
            period: Period::default(),
        }
    }
}

impl RequestConfig {
    fn validate(&self) -> Result<(), String> {
        ZoneCode::new(self.zone.as_str()).map(|_| ())
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory CSV files are written to (created if missing)
    #[serde(default = "default_output_directory")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.trim().is_empty() {
            return Err("output.directory cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
///
/// Console output is always on. The file layer writes JSON lines to a
/// rolling file under `local_path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://www.e-solat.gov.my/index.php".to_string()
}

fn default_route() -> String {
    "esolatApi/takwimsolat".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("waktusolat/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    2000
}

fn default_zone() -> String {
    "SGR01".to_string()
}

fn default_output_directory() -> String {
    "data".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WaktuConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        let config = WaktuConfig::default();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.api.base_url, "https://www.e-solat.gov.my/index.php");
        assert_eq!(config.api.route, "esolatApi/takwimsolat");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.api.retry.max_attempts, 3);
        assert_eq!(config.api.retry.base_delay_ms, 2000);
        assert_eq!(config.request.zone, "SGR01");
        assert_eq!(config.request.period, Period::Month);
        assert_eq!(config.output.directory, "data");
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: WaktuConfig = toml::from_str("").unwrap();
        assert_eq!(config.request.zone, "SGR01");
        assert_eq!(config.api.retry.max_attempts, 3);
    }

    #[test]
    fn test_api_config_validation() {
        let mut api = ApiConfig::default();
        assert!(api.validate().is_ok());

        api.base_url = "ftp://example.com".to_string();
        assert!(api.validate().is_err());

        api.base_url = "http://localhost:1234".to_string();
        api.timeout_seconds = 0;
        assert!(api.validate().is_err());

        api.timeout_seconds = 5;
        api.retry.max_attempts = 0;
        assert!(api.validate().is_err());
    }

    #[test]
    fn test_request_config_validation() {
        let mut request = RequestConfig::default();
        assert!(request.validate().is_ok());

        request.zone = "  ".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = WaktuConfig::default();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut logging = LoggingConfig::default();
        assert!(logging.validate().is_ok());

        logging.local_rotation = "weekly".to_string();
        assert!(logging.validate().is_err());

        logging.local_rotation = "hourly".to_string();
        logging.local_enabled = true;
        logging.local_path = String::new();
        assert!(logging.validate().is_err());
    }

    #[test]
    fn test_invalid_period_in_toml() {
        let result = toml::from_str::<WaktuConfig>("[request]\nperiod = \"fortnight\"\n");
        assert!(result.is_err());
    }
}
