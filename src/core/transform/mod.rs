//! Data transformation logic
//!
//! Raw e-solat day entries are reduced to the fixed [`PrayerRecord`] schema
//! before they are written.
//!
//! [`PrayerRecord`]: crate::domain::PrayerRecord

pub mod normalize;

pub use normalize::{normalize_record, normalize_records};
