//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;
use waktusolat::config::{load_config, resolve_config};
use waktusolat::domain::{ExitStatus, Period, WaktuError};

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("WAKTUSOLAT_APPLICATION_LOG_LEVEL");
    std::env::remove_var("WAKTUSOLAT_REQUEST_ZONE");
    std::env::remove_var("WAKTUSOLAT_REQUEST_PERIOD");
    std::env::remove_var("WAKTUSOLAT_API_RETRY_MAX_ATTEMPTS");
    std::env::remove_var("WAKTUSOLAT_API_TIMEOUT_SECONDS");
    std::env::remove_var("WAKTUSOLAT_OUTPUT_DIRECTORY");
    std::env::remove_var("TEST_WAKTU_OUTDIR");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[api]
base_url = "http://localhost:8080/index.php"
route = "esolatApi/takwimsolat"
timeout_seconds = 10

[api.retry]
max_attempts = 5
base_delay_ms = 500

[request]
zone = "WLY01"
period = "year"

[output]
directory = "/tmp/waktusolat"

[logging]
local_enabled = true
local_path = "/tmp/waktusolat/logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.api.base_url, "http://localhost:8080/index.php");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.retry.max_attempts, 5);
    assert_eq!(config.api.retry.base_delay_ms, 500);
    assert_eq!(config.request.zone, "WLY01");
    assert_eq!(config.request.period, Period::Year);
    assert_eq!(config.output.directory, "/tmp/waktusolat");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[request]\nzone = \"JHR01\"\n");
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.request.zone, "JHR01");
    assert_eq!(config.request.period, Period::Month);
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.api.base_url, "https://www.e-solat.gov.my/index.php");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.retry.max_attempts, 3);
    assert_eq!(config.api.retry.base_delay_ms, 2000);
    assert_eq!(config.output.directory, "data");
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_WAKTU_OUTDIR", "/srv/prayer");

    let temp_file = write_config(
        r#"
# directory = "${NOT_SUBSTITUTED_IN_COMMENTS}"
[output]
directory = "${TEST_WAKTU_OUTDIR}"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.output.directory, "/srv/prayer");

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[output]\ndirectory = \"${TEST_WAKTU_OUTDIR}\"\n");
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(matches!(err, WaktuError::Configuration(_)));
    assert!(err.to_string().contains("TEST_WAKTU_OUTDIR"));
}

#[test]
fn test_env_overrides_take_precedence_over_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("WAKTUSOLAT_REQUEST_ZONE", "PNG01");
    std::env::set_var("WAKTUSOLAT_REQUEST_PERIOD", "week");
    std::env::set_var("WAKTUSOLAT_API_RETRY_MAX_ATTEMPTS", "7");
    std::env::set_var("WAKTUSOLAT_APPLICATION_LOG_LEVEL", "warn");

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[api.retry]
max_attempts = 2

[request]
zone = "SGR01"
period = "month"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.request.zone, "PNG01");
    assert_eq!(config.request.period, Period::Week);
    assert_eq!(config.api.retry.max_attempts, 7);
    assert_eq!(config.application.log_level, "warn");

    cleanup_env_vars();
}

#[test]
fn test_invalid_env_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("WAKTUSOLAT_API_TIMEOUT_SECONDS", "soon");

    let temp_file = write_config("");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, WaktuError::Configuration(_)));
    assert_eq!(ExitStatus::from(&err), ExitStatus::InvalidInput);

    cleanup_env_vars();
}

#[test]
fn test_invalid_period_in_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[request]\nperiod = \"fortnight\"\n");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, WaktuError::Configuration(_)));
}

#[test]
fn test_zero_attempts_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[api.retry]\nmax_attempts = 0\n");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("validation failed"));
}

#[test]
fn test_explicit_config_must_exist() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let err = resolve_config(Some("/nonexistent/waktusolat.toml")).unwrap_err();
    assert!(matches!(err, WaktuError::Configuration(_)));
    assert!(err.to_string().contains("not found"));
    assert_eq!(ExitStatus::from(&err).code(), 2);
}
