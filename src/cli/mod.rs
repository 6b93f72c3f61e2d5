//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for waktusolat using clap.

pub mod commands;

use crate::config::WaktuConfig;
use crate::domain::Result;
use crate::logging::parse_log_level;
use clap::Parser;

/// Fetch JAKIM prayer times and save as CSV
#[derive(Parser, Debug)]
#[command(name = "waktusolat")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    waktusolat\n  \
    waktusolat --zone SGR01 --period month --outdir data\n  \
    waktusolat --period duration --start 2025-09-01 --end 2025-09-10 --zone SGR01 --out selangor_sep_1_10.csv")]
pub struct Cli {
    /// Path to configuration file [default: waktusolat.toml if present]
    #[arg(short, long, env = "WAKTUSOLAT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "WAKTUSOLAT_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub fetch: commands::fetch::FetchArgs,
}

impl Cli {
    /// Log level for this run; `--log-level` wins over the configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown level.
    pub fn effective_log_level<'a>(&'a self, config: &'a WaktuConfig) -> Result<&'a str> {
        let level = self
            .log_level
            .as_deref()
            .unwrap_or(config.application.log_level.as_str());
        parse_log_level(level)?;
        Ok(level)
    }
}
