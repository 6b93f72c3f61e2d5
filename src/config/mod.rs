//! Configuration management for waktusolat.
//!
//! # Overview
//!
//! Settings are layered, later layers winning:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`--config`, or `waktusolat.toml` in the working directory)
//! 3. `WAKTUSOLAT_<SECTION>_<KEY>` environment variables
//! 4. Command-line flags
//!
//! The file may reference environment variables with `${VAR_NAME}`.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [api]
//! base_url = "https://www.e-solat.gov.my/index.php"
//! route = "esolatApi/takwimsolat"
//! timeout_seconds = 30
//!
//! [api.retry]
//! max_attempts = 3
//! base_delay_ms = 2000
//!
//! [request]
//! zone = "SGR01"
//! period = "month"
//!
//! [output]
//! directory = "data"
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, resolve_config, DEFAULT_CONFIG_FILE};
pub use schema::{
    ApiConfig, ApplicationConfig, LoggingConfig, OutputConfig, RequestConfig, RetryConfig,
    WaktuConfig,
};
