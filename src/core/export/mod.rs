//! Export orchestration
//!
//! This module coordinates a single fetch-and-write run and reports its outcome.

pub mod coordinator;
pub mod summary;

pub use coordinator::{ExportCoordinator, OutputTarget};
pub use summary::{DateSpan, ExportOutcome, ExportSummary};
