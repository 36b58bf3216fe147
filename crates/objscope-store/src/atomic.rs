//! Atomic write primitives
//!
//! Uses temp→rename so a failed save never leaves a truncated file.

use std::fs;
use std::path::Path;

use crate::errors::{io_error, Result};

/// Atomically write bytes to a file
///
/// Writes to a sibling temp file first, then renames over the target.
///
/// # Errors
///
/// Returns an `Io` error naming the failing step.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_parent_dir", e))?;
        }
    }

    let temp_path = target_path.with_extension("tmp");

    fs::write(&temp_path, content).map_err(|e| io_error("write_temp", e))?;

    fs::rename(&temp_path, target_path).map_err(|e| io_error("rename_temp", e))?;

    Ok(())
}

/// Read a whole file into memory
///
/// # Errors
///
/// Returns an `Io` error when the file cannot be read.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| io_error("read_file", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("blob.bin");

        atomic_write(&target, b"hello").unwrap();

        assert_eq!(read_bytes(&target).unwrap(), b"hello");
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("nested").join("blob.bin");

        atomic_write(&target, b"nested").unwrap();

        assert_eq!(read_bytes(&target).unwrap(), b"nested");
    }

    #[test]
    fn test_no_tmp_files_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("blob.bin");

        atomic_write(&target, b"clean").unwrap();

        let tmp_count = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|s| s.ends_with(".tmp"))
                    .unwrap_or(false)
            })
            .count();

        assert_eq!(tmp_count, 0);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_bytes(&temp_dir.path().join("ghost.bin")).unwrap_err();
        assert_eq!(err.code(), "ERR_IO");
    }
}
