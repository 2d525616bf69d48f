//! Append-only job result logs.
//!
//! Every job run writes timestamped plain-text lines to its own file.
//! The file is opened, appended, and closed per line; no handle is held
//! across calls, so overlapping invocations may interleave lines but
//! never corrupt one. There is no rotation and no retention policy.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// Destination sink for a job's result lines.
///
/// The path is injected rather than hard-coded so tests and deployments
/// can point each job wherever they like; the documented defaults live
/// with the config.
#[derive(Debug, Clone)]
pub struct JobLog {
    path: PathBuf,
}

impl JobLog {
    /// A log writing to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A log writing to `file_name` inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        Self {
            path: dir.join(file_name),
        }
    }

    /// The file this log appends to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from opening or writing the file.
    pub fn append(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

/// Timestamp in the `YYYY-MM-DD HH:MM:SS` format used by most job logs.
#[must_use]
pub fn event_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Timestamp in the `DD/MM/YYYY-HH:MM:SS` format used by the heartbeat log.
#[must_use]
pub fn heartbeat_timestamp() -> String {
    Local::now().format("%d/%m/%Y-%H:%M:%S").to_string()
}
