//! CSV writer
//!
//! Rows are written to a uniquely named temporary file in the output directory
//! and persisted over the target once flushed, so a failed write never leaves
//! a truncated target or a stray temporary file.

use crate::domain::{PrayerRecord, Result, WaktuError, PRAYER_FIELDS};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Write `records` to `outdir/filename` and return the full path
///
/// The directory (and any missing parents) is created first. An existing
/// file is replaced.
///
/// # Errors
///
/// Returns [`WaktuError::Write`] if the directory cannot be created or the
/// file cannot be written or moved into place.
///
/// # Examples
///
/// ```no_run
/// use waktusolat::core::output::write_csv;
/// use waktusolat::domain::PrayerRecord;
///
/// let records = vec![PrayerRecord::default()];
/// let path = write_csv(&records, "data", "waktusolat_SGR01_month_2025-09.csv").unwrap();
/// println!("{}", path.display());
/// ```
pub fn write_csv(
    records: &[PrayerRecord],
    outdir: impl AsRef<Path>,
    filename: &str,
) -> Result<PathBuf> {
    let outdir = outdir.as_ref();

    fs::create_dir_all(outdir).map_err(|e| {
        WaktuError::Write(format!(
            "Failed to create output directory {}: {}",
            outdir.display(),
            e
        ))
    })?;

    let outpath = outdir.join(filename);

    tracing::info!(path = %outpath.display(), rows = records.len(), "Writing CSV → {}", outpath.display());

    // Dropping the temp file on any error path deletes it
    let temp = temp_file_in(outdir, filename)?;
    let temp = write_rows(records, temp)?;

    temp.persist(&outpath).map_err(|e| {
        WaktuError::Write(format!(
            "Failed to move CSV into place at {}: {}",
            outpath.display(),
            e.error
        ))
    })?;

    tracing::info!(rows = records.len(), "Done. Rows written: {}", records.len());
    Ok(outpath)
}

fn temp_file_in(outdir: &Path, filename: &str) -> Result<NamedTempFile> {
    let prefix = format!(".{filename}.");
    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".tmp");

    // Temp files default to 0600; the CSV should be readable like any other output
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    builder
        .tempfile_in(outdir)
        .map_err(|e| {
            WaktuError::Write(format!(
                "Failed to create temporary file in {}: {}",
                outdir.display(),
                e
            ))
        })
}

fn write_rows(records: &[PrayerRecord], temp: NamedTempFile) -> Result<NamedTempFile> {
    let mut wtr = csv::Writer::from_writer(temp);

    wtr.write_record(PRAYER_FIELDS)?;
    for record in records {
        wtr.write_record(record.values())?;
    }

    let mut temp = wtr
        .into_inner()
        .map_err(|e| WaktuError::Write(format!("Failed to flush CSV: {}", e.error())))?;
    temp.flush()?;
    Ok(temp)
}
