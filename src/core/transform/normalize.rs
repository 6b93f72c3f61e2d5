//! Record normalization
//!
//! Maps raw day entries onto [`PrayerRecord`]. Total: missing keys become
//! empty strings, unknown keys are dropped, and an entry that is not a JSON
//! object becomes an all-empty record.

use crate::domain::PrayerRecord;
use serde_json::{Map, Value};

/// Normalize every raw entry, preserving order
///
/// # Examples
///
/// ```
/// use waktusolat::core::transform::normalize_records;
/// use serde_json::json;
///
/// let raw = vec![json!({"date": "01-Sep-2025", "fajr": "05:58:00", "extra": 1})];
/// let records = normalize_records(&raw);
/// assert_eq!(records[0].date, "01-Sep-2025");
/// assert_eq!(records[0].isha, "");
/// ```
pub fn normalize_records(items: &[Value]) -> Vec<PrayerRecord> {
    items.iter().map(normalize_record).collect()
}

/// Normalize a single raw entry
pub fn normalize_record(item: &Value) -> PrayerRecord {
    match item {
        Value::Object(map) => PrayerRecord::from_fields(|field| field_value(map, field)),
        _ => PrayerRecord::default(),
    }
}

fn field_value(map: &Map<String, Value>, field: &str) -> String {
    match map.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
