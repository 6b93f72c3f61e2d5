//! Validated fetch request

use crate::domain::period::{DateRange, Period};
use crate::domain::zone::ZoneCode;
use crate::domain::Result;
use std::fmt;

/// Parameters of one e-solat request
///
/// Built once from configuration and flags, then only read. A duration request
/// always carries a date range; other modes never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    zone: ZoneCode,
    period: Period,
    range: Option<DateRange>,
}

impl FetchRequest {
    /// Build a request, validating the date range when `period` is duration
    ///
    /// `start` and `end` are ignored for the other modes.
    ///
    /// # Errors
    ///
    /// Returns [`WaktuError::Input`](crate::domain::WaktuError::Input) when a
    /// duration request is missing a date or has a malformed one.
    ///
    /// # Example
    ///
    /// ```
    /// use waktusolat::domain::{FetchRequest, Period, ZoneCode};
    ///
    /// let zone = ZoneCode::new("SGR01").unwrap();
    /// let request = FetchRequest::new(
    ///     zone,
    ///     Period::Duration,
    ///     Some("2025-09-01"),
    ///     Some("2025-09-10"),
    /// )
    /// .unwrap();
    /// assert!(request.range().is_some());
    /// ```
    pub fn new(
        zone: ZoneCode,
        period: Period,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Self> {
        let range = if period.is_duration() {
            Some(DateRange::parse(start, end)?)
        } else {
            None
        };

        Ok(Self {
            zone,
            period,
            range,
        })
    }

    pub fn zone(&self) -> &ZoneCode {
        &self.zone
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn range(&self) -> Option<&DateRange> {
        self.range.as_ref()
    }

    /// Query parameters shared by GET and POST requests
    pub fn query_params(&self) -> [(&'static str, &str); 2] {
        [("period", self.period.as_str()), ("zone", self.zone.as_str())]
    }

    /// Form body for duration requests
    pub fn form_params(&self) -> Option<[(&'static str, String); 2]> {
        self.range
            .map(|range| [("datestart", range.start_str()), ("dateend", range.end_str())])
    }
}

impl fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone={} period={}", self.zone, self.period)?;
        if let Some(range) = &self.range {
            write!(f, " range={range}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WaktuError;

    fn zone() -> ZoneCode {
        ZoneCode::new("SGR01").unwrap()
    }

    #[test]
    fn test_month_request_ignores_dates() {
        let request =
            FetchRequest::new(zone(), Period::Month, Some("garbage"), None).unwrap();
        assert!(request.range().is_none());
        assert!(request.form_params().is_none());
        assert_eq!(
            request.query_params(),
            [("period", "month"), ("zone", "SGR01")]
        );
    }

    #[test]
    fn test_duration_request_form_params() {
        let request = FetchRequest::new(
            zone(),
            Period::Duration,
            Some("2025-09-01"),
            Some("2025-09-10"),
        )
        .unwrap();

        let form = request.form_params().unwrap();
        assert_eq!(form[0], ("datestart", "2025-09-01".to_string()));
        assert_eq!(form[1], ("dateend", "2025-09-10".to_string()));
        assert_eq!(
            request.query_params(),
            [("period", "duration"), ("zone", "SGR01")]
        );
    }

    #[test]
    fn test_duration_request_requires_both_dates() {
        let err = FetchRequest::new(zone(), Period::Duration, Some("2025-09-01"), None)
            .unwrap_err();
        assert!(matches!(err, WaktuError::Input(_)));
    }

    #[test]
    fn test_duration_request_rejects_malformed_date() {
        let err = FetchRequest::new(zone(), Period::Duration, Some("2025-9-1"), Some("2025-09-10"))
            .unwrap_err();
        assert!(matches!(err, WaktuError::Input(_)));
    }

    #[test]
    fn test_request_display() {
        let request = FetchRequest::new(
            zone(),
            Period::Duration,
            Some("2025-09-01"),
            Some("2025-09-10"),
        )
        .unwrap();
        assert_eq!(
            request.to_string(),
            "zone=SGR01 period=duration range=2025-09-01..2025-09-10"
        );
    }
}
