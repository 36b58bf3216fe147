//! Load preflight: the checks that run before any bytes are interpreted.
//!
//! Rejects empty files outright and flags oversized files so the caller
//! can demand explicit confirmation before committing memory and time.

use std::path::{Path, PathBuf};

use objscope_core::errors::{ObjScopeError, Result};

use crate::errors::io_error;

/// Outcome of the pre-read checks on a load candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preflight {
    /// The file under consideration
    pub path: PathBuf,

    /// Its size in bytes
    pub byte_len: u64,

    /// Threshold the size was compared against
    pub threshold_bytes: u64,

    /// Whether the file exceeds the threshold and needs confirmation
    pub oversized: bool,
}

/// Run the pre-read checks for a load.
///
/// # Errors
///
/// - `Io` when the file is missing or unreadable
/// - `EmptyFile` for zero-byte files
pub fn preflight(path: &Path, threshold_mb: u64) -> Result<Preflight> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error("stat_file", e))?;
    let byte_len = metadata.len();

    if byte_len == 0 {
        return Err(ObjScopeError::EmptyFile {
            path: path.display().to_string(),
        });
    }

    let threshold_bytes = threshold_mb.saturating_mul(1024 * 1024);
    Ok(Preflight {
        path: path.to_path_buf(),
        byte_len,
        threshold_bytes,
        oversized: byte_len > threshold_bytes,
    })
}
