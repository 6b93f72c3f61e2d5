//! Export coordinator
//!
//! Runs one export as a straight line: fetch, normalize, write, summarize.
//! Request validation happens earlier, when the [`FetchRequest`] is built.

use super::summary::{ExportOutcome, ExportSummary};
use crate::adapters::esolat::EsolatClient;
use crate::config::WaktuConfig;
use crate::core::output::{resolve_filename, write_csv};
use crate::core::transform::normalize_records;
use crate::domain::{FetchRequest, Result};
use std::path::PathBuf;
use std::time::Instant;

/// Where and under what name the CSV is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Output directory, created if missing
    pub directory: PathBuf,

    /// Explicit filename; the default is derived from the request when unset
    pub filename: Option<String>,
}

impl OutputTarget {
    pub fn new(directory: impl Into<PathBuf>, filename: Option<String>) -> Self {
        Self {
            directory: directory.into(),
            filename,
        }
    }
}

/// Export coordinator
pub struct ExportCoordinator {
    client: EsolatClient,
}

impl ExportCoordinator {
    /// Create a coordinator from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &WaktuConfig) -> Result<Self> {
        let client = EsolatClient::new(&config.api)?;
        Ok(Self { client })
    }

    /// Execute one export
    ///
    /// # Errors
    ///
    /// - [`WaktuError::Fetch`](crate::domain::WaktuError::Fetch) once every
    ///   attempt failed
    /// - [`WaktuError::Write`](crate::domain::WaktuError::Write) if the CSV
    ///   cannot be written
    pub async fn execute(
        &self,
        request: &FetchRequest,
        target: &OutputTarget,
    ) -> Result<ExportOutcome> {
        let start_time = Instant::now();

        let envelope = self.client.fetch(request).await?;

        if envelope.is_empty() {
            tracing::warn!("No 'prayerTime' entries returned. Exiting without writing.");
            return Ok(ExportOutcome::Empty);
        }

        let records = normalize_records(&envelope.prayer_time);
        let filename = resolve_filename(target.filename.as_deref(), request);
        let output_path = write_csv(&records, &target.directory, &filename)?;

        let summary =
            ExportSummary::new(output_path, &records).with_duration(start_time.elapsed());

        if let Some(span) = &summary.date_span {
            tracing::info!(
                first = %span.first,
                last = %span.last,
                days = span.days,
                "Date range in file: {} → {} (total {} days)",
                span.first,
                span.last,
                span.days
            );
        }

        Ok(ExportOutcome::Written(summary))
    }
}
