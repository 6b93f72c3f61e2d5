//! CSV output
//!
//! - [`csv`] - all-or-nothing CSV writer
//! - [`filename`] - default output filenames

pub mod csv;
pub mod filename;

pub use self::csv::write_csv;
pub use filename::{default_filename, default_filename_now, resolve_filename};
