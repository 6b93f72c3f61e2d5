//! Domain error types
//!
//! This module defines the error hierarchy for waktusolat.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main waktusolat error type
///
/// This is the primary error type used throughout the application.
/// Each variant corresponds to one phase of a run, which is what the CLI
/// uses to pick an exit code.
#[derive(Debug, Error)]
pub enum WaktuError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request input (bad or missing dates for a duration request)
    #[error("Input error: {0}")]
    Input(String),

    /// e-solat fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Output errors (directory creation, file write, rename)
    #[error("Write error: {0}")]
    Write(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors from a single attempt against the e-solat API
///
/// Every variant is treated as transient by the retry loop; only the error of
/// the final attempt reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Failed to connect or send the request
    #[error("Failed to connect to e-solat: {0}")]
    ConnectionFailed(String),

    /// The attempt exceeded the configured timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Non-2xx HTTP status
    #[error("HTTP status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Body was not valid JSON or not a JSON object
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// The API reported an error in its `status` list
    #[error("API reported error status: {0}")]
    ApiStatus(String),

    /// The body has no `prayerTime` array
    #[error("API response missing 'prayerTime' array")]
    MissingPrayerTimes,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            FetchError::ConnectionFailed(err.to_string())
        }
    }
}

impl From<std::io::Error> for WaktuError {
    fn from(err: std::io::Error) -> Self {
        WaktuError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WaktuError {
    fn from(err: serde_json::Error) -> Self {
        WaktuError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for WaktuError {
    fn from(err: toml::de::Error) -> Self {
        WaktuError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for WaktuError {
    fn from(err: csv::Error) -> Self {
        WaktuError::Write(format!("CSV error: {err}"))
    }
}
