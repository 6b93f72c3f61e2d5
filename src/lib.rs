// waktusolat - JAKIM e-solat prayer times to CSV
// Copyright (c) 2025 Waktusolat Contributors
// Licensed under the MIT License

//! # waktusolat - JAKIM prayer times to CSV
//!
//! waktusolat fetches prayer time schedules from the JAKIM e-solat API and
//! saves them as CSV files with a fixed column set.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export flow (retry, normalize, write, summarize)
//! - [`adapters`] - The e-solat HTTP client
//! - [`domain`] - Request types, output schema, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use waktusolat::config::WaktuConfig;
//! use waktusolat::core::export::{ExportCoordinator, OutputTarget};
//! use waktusolat::domain::{FetchRequest, Period, ZoneCode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WaktuConfig::default();
//!     let coordinator = ExportCoordinator::new(&config)?;
//!
//!     let request = FetchRequest::new(
//!         ZoneCode::new("SGR01")?,
//!         Period::Duration,
//!         Some("2025-09-01"),
//!         Some("2025-09-10"),
//!     )?;
//!
//!     let outcome = coordinator
//!         .execute(&request, &OutputTarget::new("data", None))
//!         .await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`], whose error type
//! [`domain::WaktuError`] maps onto the process exit codes via
//! [`domain::ExitStatus`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
