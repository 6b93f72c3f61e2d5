//! Period modes and explicit date ranges

use crate::domain::{Result, WaktuError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format accepted on the command line and sent to the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Granularity of the requested schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// The current calendar week
    Week,
    /// The current calendar month
    #[default]
    Month,
    /// The current calendar year
    Year,
    /// An explicit start/end range, sent as a POST
    Duration,
}

impl Period {
    /// All period modes in CLI order
    pub const ALL: [Period; 4] = [Period::Week, Period::Month, Period::Year, Period::Duration];

    /// The value sent in the `period` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::Duration => "duration",
        }
    }

    /// Whether this mode needs an explicit date range
    pub fn is_duration(&self) -> bool {
        matches!(self, Period::Duration)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = WaktuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "duration" => Ok(Self::Duration),
            _ => Err(WaktuError::Configuration(format!(
                "Invalid period: {s}. Expected one of: week, month, year, duration"
            ))),
        }
    }
}

/// Inclusive start/end dates for a duration request
///
/// Ordering is not checked: a start after the end is passed through and the
/// API reports it through its `status` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Parse a range from the raw `--start`/`--end` values
    ///
    /// Both values are required. Each must be a real calendar date written
    /// exactly as `YYYY-MM-DD`; `2025-9-1` is rejected.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let start = parse_date_arg("start", start)?;
        let end = parse_date_arg("end", end)?;
        Ok(Self { start, end })
    }

    /// Start date formatted for the API and filenames
    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// End date formatted for the API and filenames
    pub fn end_str(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_str(), self.end_str())
    }
}

fn parse_date_arg(name: &str, value: Option<&str>) -> Result<NaiveDate> {
    let value = value.ok_or_else(|| {
        WaktuError::Input(format!("--{name} is required for period=duration"))
    })?;

    let invalid = || WaktuError::Input(format!("--{name} must be YYYY-MM-DD (got {value:?})"));

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())?;

    // chrono accepts unpadded fields; the canonical form must round-trip
    if date.format(DATE_FORMAT).to_string() != value {
        return Err(invalid());
    }

    Ok(date)
}
