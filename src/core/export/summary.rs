//! Export summary and reporting

use crate::domain::PrayerRecord;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

/// Distinct dates found in the written rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSpan {
    /// Smallest date string
    pub first: String,

    /// Largest date string
    pub last: String,

    /// Number of distinct non-empty dates
    pub days: usize,
}

impl DateSpan {
    /// Compute the span over non-empty `date` values
    ///
    /// Dates are compared as strings, so the API's `01-Sep-2025` format sorts
    /// by day of month first. Returns `None` when no record has a date.
    pub fn from_records(records: &[PrayerRecord]) -> Option<Self> {
        let dates: BTreeSet<&str> = records
            .iter()
            .map(|r| r.date.as_str())
            .filter(|d| !d.is_empty())
            .collect();

        let first = dates.iter().next()?;
        let last = dates.iter().next_back()?;

        Some(Self {
            first: first.to_string(),
            last: last.to_string(),
            days: dates.len(),
        })
    }
}

/// Summary of a completed export
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Full path of the written CSV
    pub output_path: PathBuf,

    /// Data rows written (excluding the header)
    pub rows_written: usize,

    /// Date coverage of the file
    pub date_span: Option<DateSpan>,

    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    pub fn new(output_path: PathBuf, records: &[PrayerRecord]) -> Self {
        Self {
            output_path,
            rows_written: records.len(),
            date_span: DateSpan::from_records(records),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Terminal outcome of an export that did not fail
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    /// Records were fetched and written
    Written(ExportSummary),

    /// The API returned no records; nothing was written
    Empty,
}
