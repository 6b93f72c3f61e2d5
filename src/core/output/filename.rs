//! Default output filenames

use crate::domain::FetchRequest;
use chrono::{Local, NaiveDate};

/// Derive the default CSV filename for `request`
///
/// - duration: `waktusolat_{zone}_{start}_to_{end}.csv`
/// - otherwise: `waktusolat_{zone}_{period}_{YYYY-MM}.csv`, where the month is
///   taken from `today`
///
/// # Examples
///
/// ```
/// use waktusolat::core::output::default_filename;
/// use waktusolat::domain::{FetchRequest, Period, ZoneCode};
/// use chrono::NaiveDate;
///
/// let request = FetchRequest::new(ZoneCode::new("SGR01").unwrap(), Period::Year, None, None).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();
/// assert_eq!(default_filename(&request, today), "waktusolat_SGR01_year_2025-09.csv");
/// ```
pub fn default_filename(request: &FetchRequest, today: NaiveDate) -> String {
    match request.range() {
        Some(range) => format!(
            "waktusolat_{}_{}_to_{}.csv",
            request.zone(),
            range.start_str(),
            range.end_str()
        ),
        None => format!(
            "waktusolat_{}_{}_{}.csv",
            request.zone(),
            request.period(),
            today.format("%Y-%m")
        ),
    }
}

/// [`default_filename`] using the local wall-clock date
pub fn default_filename_now(request: &FetchRequest) -> String {
    default_filename(request, Local::now().date_naive())
}

/// The explicit filename if given, otherwise the derived default
pub fn resolve_filename(explicit: Option<&str>, request: &FetchRequest) -> String {
    match explicit.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => default_filename_now(request),
    }
}
