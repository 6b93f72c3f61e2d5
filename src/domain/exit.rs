//! Process exit statuses

use crate::domain::errors::WaktuError;

/// Terminal outcome of a CLI run, as a process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// CSV written
    Success,
    /// Fetch still failing after the last attempt
    FetchFailed,
    /// Bad dates, flags or configuration; no network call made
    InvalidInput,
    /// The API answered with an empty `prayerTime` list; nothing written
    NoRecords,
    /// Output directory or file could not be written
    WriteFailed,
    /// Setup failed before a run could start (e.g. logging)
    Fatal,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::FetchFailed => 1,
            ExitStatus::InvalidInput => 2,
            ExitStatus::NoRecords => 3,
            ExitStatus::WriteFailed => 4,
            ExitStatus::Fatal => 5,
        }
    }
}

impl From<&WaktuError> for ExitStatus {
    fn from(err: &WaktuError) -> Self {
        match err {
            WaktuError::Input(_) | WaktuError::Configuration(_) => ExitStatus::InvalidInput,
            WaktuError::Fetch(_) | WaktuError::Serialization(_) => ExitStatus::FetchFailed,
            WaktuError::Write(_) | WaktuError::Io(_) => ExitStatus::WriteFailed,
        }
    }
}
