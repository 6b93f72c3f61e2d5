//! e-solat API response models
//!
//! A `takwimsolat` response looks like:
//!
//! ```json
//! {
//!   "prayerTime": [
//!     {"hijri": "1447-03-08", "date": "01-Sep-2025", "day": "Monday",
//!      "imsak": "05:48:00", "fajr": "05:58:00", "syuruk": "07:08:00",
//!      "dhuhr": "13:14:00", "asr": "16:25:00", "maghrib": "19:17:00",
//!      "isha": "20:28:00"}
//!   ],
//!   "status": ["OK!"],
//!   "serverTime": "2025-09-01 10:00:00",
//!   "periodType": "month",
//!   "zone": "SGR01"
//! }
//! ```
//!
//! Only `prayerTime` is required. Day entries are kept as raw JSON and
//! normalized later.

use crate::domain::FetchError;
use serde::Deserialize;
use serde_json::Value;

/// Parsed and shape-checked API response
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerTimeEnvelope {
    /// One raw entry per calendar day
    pub prayer_time: Vec<Value>,

    /// Messages from the `status` field, if any
    pub status: Vec<String>,

    /// Zone echoed back by the server
    pub zone: Option<String>,

    /// Server timestamp
    pub server_time: Option<String>,

    /// Period echoed back by the server
    pub period_type: Option<String>,
}

impl PrayerTimeEnvelope {
    pub fn is_empty(&self) -> bool {
        self.prayer_time.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prayer_time.len()
    }
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(rename = "prayerTime", default)]
    prayer_time: Option<Value>,

    #[serde(default)]
    status: Option<Value>,

    #[serde(default)]
    zone: Option<Value>,

    #[serde(rename = "serverTime", default)]
    server_time: Option<Value>,

    #[serde(rename = "periodType", default)]
    period_type: Option<Value>,
}

/// Parse a response body and check its shape
///
/// # Errors
///
/// - [`FetchError::InvalidResponse`] if the body is not a JSON object
/// - [`FetchError::ApiStatus`] if any status message starts with "error"
///   (case-insensitive)
/// - [`FetchError::MissingPrayerTimes`] if `prayerTime` is absent or not a list
pub fn parse_envelope(body: &str) -> Result<PrayerTimeEnvelope, FetchError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::InvalidResponse(format!("body is not valid JSON: {e}")))?;

    if !value.is_object() {
        return Err(FetchError::InvalidResponse(
            "expected a JSON object at the top level".to_string(),
        ));
    }

    let raw: RawEnvelope = serde_json::from_value(value)
        .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

    let status = status_messages(raw.status.as_ref());
    if !status.is_empty() {
        let joined = status.join(" | ");
        tracing::info!(status = %joined, "API status");

        if status.iter().any(|s| is_error_status(s)) {
            return Err(FetchError::ApiStatus(joined));
        }
    }

    let prayer_time = match raw.prayer_time {
        Some(Value::Array(items)) => items,
        _ => return Err(FetchError::MissingPrayerTimes),
    };

    Ok(PrayerTimeEnvelope {
        prayer_time,
        status,
        zone: raw.zone.as_ref().and_then(value_as_string),
        server_time: raw.server_time.as_ref().and_then(value_as_string),
        period_type: raw.period_type.as_ref().and_then(value_as_string),
    })
}

/// Collect the string entries of a list-valued `status`; any other shape is ignored
fn status_messages(status: Option<&Value>) -> Vec<String> {
    match status {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn is_error_status(message: &str) -> bool {
    message.to_lowercase().starts_with("error")
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
