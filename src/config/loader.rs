//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::WaktuConfig;
use crate::domain::errors::WaktuError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "waktusolat.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into WaktuConfig
/// 4. Applies environment variable overrides (WAKTUSOLAT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read or parsed, a
/// referenced environment variable is missing, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use waktusolat::config::loader::load_config;
///
/// let config = load_config("waktusolat.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<WaktuConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(WaktuError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        WaktuError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: WaktuConfig = toml::from_str(&contents)
        .map_err(|e| WaktuError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        WaktuError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Resolves the configuration for a run
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is used if
/// it exists in the working directory; otherwise built-in defaults apply.
/// Environment overrides are applied in every case.
pub fn resolve_config(explicit: Option<&str>) -> Result<WaktuConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        return load_config(DEFAULT_CONFIG_FILE);
    }

    tracing::debug!("No configuration file found, using built-in defaults");
    let mut config = WaktuConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        WaktuError::Configuration(format!("Configuration validation failed: {e}"))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| WaktuError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(WaktuError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using WAKTUSOLAT_* prefix
///
/// Environment variables follow the pattern: WAKTUSOLAT_<SECTION>_<KEY>
/// For example: WAKTUSOLAT_REQUEST_ZONE, WAKTUSOLAT_API_TIMEOUT_SECONDS
fn apply_env_overrides(config: &mut WaktuConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("WAKTUSOLAT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // API overrides
    if let Ok(val) = std::env::var("WAKTUSOLAT_API_BASE_URL") {
        config.api.base_url = val;
    }
    if let Ok(val) = std::env::var("WAKTUSOLAT_API_ROUTE") {
        config.api.route = val;
    }
    if let Ok(val) = std::env::var("WAKTUSOLAT_API_TIMEOUT_SECONDS") {
        config.api.timeout_seconds = parse_override("WAKTUSOLAT_API_TIMEOUT_SECONDS", &val)?;
    }
    if let Ok(val) = std::env::var("WAKTUSOLAT_API_RETRY_MAX_ATTEMPTS") {
        config.api.retry.max_attempts =
            parse_override("WAKTUSOLAT_API_RETRY_MAX_ATTEMPTS", &val)?;
    }
    if let Ok(val) = std::env::var("WAKTUSOLAT_API_RETRY_BASE_DELAY_MS") {
        config.api.retry.base_delay_ms =
            parse_override("WAKTUSOLAT_API_RETRY_BASE_DELAY_MS", &val)?;
    }

    // Request overrides
    if let Ok(val) = std::env::var("WAKTUSOLAT_REQUEST_ZONE") {
        config.request.zone = val;
    }
    if let Ok(val) = std::env::var("WAKTUSOLAT_REQUEST_PERIOD") {
        config.request.period = val.parse()?;
    }

    // Output overrides
    if let Ok(val) = std::env::var("WAKTUSOLAT_OUTPUT_DIRECTORY") {
        config.output.directory = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("WAKTUSOLAT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("WAKTUSOLAT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("WAKTUSOLAT_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn parse_override<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        WaktuError::Configuration(format!("Invalid value for {name}: {value:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("WAKTU_TEST_ZONE_VAR", "JHR02");
        let input = "zone = \"${WAKTU_TEST_ZONE_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "zone = \"JHR02\"\n");
        std::env::remove_var("WAKTU_TEST_ZONE_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("WAKTU_TEST_MISSING_VAR");
        let input = "zone = \"${WAKTU_TEST_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("WAKTU_TEST_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("WAKTU_TEST_COMMENTED_VAR");
        let input = "# zone = \"${WAKTU_TEST_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_parse_override() {
        assert_eq!(parse_override::<u64>("X", " 15 ").unwrap(), 15);
        assert!(parse_override::<u32>("X", "three").is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-waktusolat.toml");
        assert!(matches!(result, Err(WaktuError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[api]
base_url = "http://127.0.0.1:9999/index.php"
timeout_seconds = 10

[api.retry]
max_attempts = 5
base_delay_ms = 100

[request]
zone = "WLY01"
period = "week"

[output]
directory = "out"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9999/index.php");
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.api.retry.max_attempts, 5);
        assert_eq!(config.request.zone, "WLY01");
        assert_eq!(config.output.directory, "out");
    }
}
