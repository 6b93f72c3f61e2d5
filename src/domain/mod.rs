//! Domain models and types for waktusolat.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Request types** ([`ZoneCode`], [`Period`], [`DateRange`], [`FetchRequest`])
//! - **The output schema** ([`PrayerRecord`], [`PRAYER_FIELDS`])
//! - **Error types** ([`WaktuError`], [`FetchError`]) and the [`Result`] alias
//! - **Exit statuses** ([`ExitStatus`]) for the CLI
//!
//! # Validation
//!
//! Inputs are validated once, when the request is built. A duration request
//! without two well-formed dates never reaches the network:
//!
//! ```rust
//! use waktusolat::domain::{FetchRequest, Period, WaktuError, ZoneCode};
//!
//! let zone = ZoneCode::new("SGR01").unwrap();
//! let err = FetchRequest::new(zone, Period::Duration, Some("2025-9-1"), None).unwrap_err();
//! assert!(matches!(err, WaktuError::Input(_)));
//! ```

pub mod errors;
pub mod exit;
pub mod period;
pub mod record;
pub mod request;
pub mod result;
pub mod zone;

pub use errors::{FetchError, WaktuError};
pub use exit::ExitStatus;
pub use period::{DateRange, Period, DATE_FORMAT};
pub use record::{PrayerRecord, PRAYER_FIELDS};
pub use request::FetchRequest;
pub use result::Result;
pub use zone::ZoneCode;
