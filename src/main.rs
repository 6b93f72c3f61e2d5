// waktusolat - JAKIM e-solat prayer times to CSV
// Copyright (c) 2025 Waktusolat Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use waktusolat::cli::Cli;
use waktusolat::config::{resolve_config, LoggingConfig};
use waktusolat::domain::{ExitStatus, WaktuError};
use waktusolat::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match resolve_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_before_run(&e),
    };

    let log_level = match cli.effective_log_level(&config) {
        Ok(level) => level.to_string(),
        Err(e) => exit_before_run(&e),
    };

    let logging_guard = match init_logging(&log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(ExitStatus::Fatal.code());
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "waktusolat");

    let status = cli.fetch.execute(config).await;

    // process::exit skips destructors; flush file logs first
    drop(logging_guard);
    process::exit(status.code());
}

/// Report a setup error on the default console logger and exit
fn exit_before_run(err: &WaktuError) -> ! {
    match init_logging("info", &LoggingConfig::default()) {
        Ok(_guard) => {
            waktusolat::log_error_with_context!(err, "Invalid configuration");
        }
        Err(_) => eprintln!("Invalid configuration: {err}"),
    }
    process::exit(ExitStatus::from(err).code());
}
