//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Timestamped console output on stdout
//! - Configurable log levels
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use waktusolat::logging::init_logging;
//! use waktusolat::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(zone = "SGR01", "Start");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log one API call attempt
///
/// # Example
///
/// ```no_run
/// use waktusolat::log_fetch_attempt;
/// use waktusolat::domain::{FetchRequest, Period, ZoneCode};
///
/// let request = FetchRequest::new(ZoneCode::new("SGR01").unwrap(), Period::Month, None, None).unwrap();
/// log_fetch_attempt!(1, 3, &request);
/// ```
#[macro_export]
macro_rules! log_fetch_attempt {
    ($attempt:expr, $max_attempts:expr, $request:expr) => {
        match $request.range() {
            Some(range) => tracing::info!(
                attempt = $attempt,
                max_attempts = $max_attempts,
                zone = %$request.zone(),
                period = %$request.period(),
                start = %range.start_str(),
                end = %range.end_str(),
                "API call (duration) attempt {}/{}",
                $attempt,
                $max_attempts
            ),
            None => tracing::info!(
                attempt = $attempt,
                max_attempts = $max_attempts,
                zone = %$request.zone(),
                period = %$request.period(),
                "API call attempt {}/{}",
                $attempt,
                $max_attempts
            ),
        }
    };
}

/// Log a retry before sleeping
///
/// # Example
///
/// ```no_run
/// use waktusolat::log_retry_attempt;
/// use std::time::Duration;
///
/// log_retry_attempt!(2, 3, Duration::from_secs(2));
/// ```
#[macro_export]
macro_rules! log_retry_attempt {
    ($next_attempt:expr, $max_attempts:expr, $delay:expr) => {
        tracing::info!(
            next_attempt = $next_attempt,
            max_attempts = $max_attempts,
            delay_ms = $delay.as_millis() as u64,
            "Retrying in {:.1}s",
            $delay.as_secs_f64()
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use waktusolat::log_error_with_context;
/// use waktusolat::domain::WaktuError;
///
/// let error = WaktuError::Write("permission denied".to_string());
/// log_error_with_context!(&error, "FAILED to write CSV");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "{}: {}",
            $context,
            $error
        );
    };
}
