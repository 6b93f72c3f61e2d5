//! Core logic for waktusolat.
//!
//! # Modules
//!
//! - [`export`] - Export orchestration and summary
//! - [`retry`] - Bounded retry with linear backoff
//! - [`transform`] - Normalization of raw day entries
//! - [`output`] - CSV writing and default filenames
//!
//! # Export Workflow
//!
//! 1. **Validate**: build a [`FetchRequest`](crate::domain::FetchRequest)
//! 2. **Fetch**: call e-solat, retrying transient failures
//! 3. **Normalize**: reduce day entries to the fixed schema
//! 4. **Write**: write the CSV atomically
//! 5. **Summarize**: report rows and date range
//!
//! # Example
//!
//! ```rust,no_run
//! use waktusolat::config::WaktuConfig;
//! use waktusolat::core::export::{ExportCoordinator, ExportOutcome, OutputTarget};
//! use waktusolat::domain::{FetchRequest, Period, ZoneCode};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WaktuConfig::default();
//! let coordinator = ExportCoordinator::new(&config)?;
//!
//! let request = FetchRequest::new(ZoneCode::new("SGR01")?, Period::Month, None, None)?;
//! let target = OutputTarget::new("data", None);
//!
//! match coordinator.execute(&request, &target).await? {
//!     ExportOutcome::Written(summary) => println!("{}", summary.output_path.display()),
//!     ExportOutcome::Empty => println!("nothing to write"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod output;
pub mod retry;
pub mod transform;
