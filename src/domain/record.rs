//! Normalized prayer time record
//!
//! The e-solat API returns one loosely-typed object per day. Output files use
//! the fixed column set below regardless of what the API adds or drops, so the
//! CSV schema stays stable.

use serde::{Deserialize, Serialize};

/// CSV column names, in output order
pub const PRAYER_FIELDS: [&str; 10] = [
    "date", "hijri", "day", "imsak", "fajr", "syuruk", "dhuhr", "asr", "maghrib", "isha",
];

/// One day of prayer times reduced to the output schema
///
/// Field declaration order matches [`PRAYER_FIELDS`]. Missing source values
/// are empty strings, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerRecord {
    /// Gregorian date as sent by the API (e.g. `01-Sep-2025`)
    pub date: String,

    /// Hijri (lunar calendar) date
    pub hijri: String,

    /// Weekday name
    pub day: String,

    pub imsak: String,
    pub fajr: String,
    pub syuruk: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl PrayerRecord {
    /// Build a record by looking up each schema field with `lookup`
    pub fn from_fields<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        let [date, hijri, day, imsak, fajr, syuruk, dhuhr, asr, maghrib, isha] =
            PRAYER_FIELDS.map(|field| lookup(field));

        Self {
            date,
            hijri,
            day,
            imsak,
            fajr,
            syuruk,
            dhuhr,
            asr,
            maghrib,
            isha,
        }
    }

    /// Field values in schema order
    pub fn values(&self) -> [&str; 10] {
        [
            self.date.as_str(),
            self.hijri.as_str(),
            self.day.as_str(),
            self.imsak.as_str(),
            self.fajr.as_str(),
            self.syuruk.as_str(),
            self.dhuhr.as_str(),
            self.asr.as_str(),
            self.maghrib.as_str(),
            self.isha.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_follows_schema_order() {
        let record = PrayerRecord::from_fields(|field| field.to_uppercase());
        assert_eq!(record.date, "DATE");
        assert_eq!(record.hijri, "HIJRI");
        assert_eq!(record.isha, "ISHA");

        for (name, value) in PRAYER_FIELDS.iter().zip(record.values()) {
            assert_eq!(value, name.to_uppercase());
        }
    }

    #[test]
    fn test_default_record_is_all_empty() {
        let record = PrayerRecord::default();
        assert!(record.values().iter().all(|v| v.is_empty()));
        assert_eq!(record.values().len(), PRAYER_FIELDS.len());
    }
}
