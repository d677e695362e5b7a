//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Read a UTF-8 text file.
///
/// Wraps `fs::read_to_string`; invalid UTF-8 surfaces as `FileReadFailed`
/// like any other read fault.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_read_failed(path, e.to_string()))
}

/// Overwrite a file with new content.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_write_failed(path, e.to_string()))
}

/// Write content to file atomically (write to .tmp, then rename).
///
/// The rename is atomic on POSIX filesystems, so readers always see either
/// the old content or the new content, never a partial write. A symlinked
/// path is resolved first so the link itself survives. The temp file takes
/// the original's permissions, and an existing `<name>.tmp` is never
/// overwritten: the write fails instead.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let (Some(parent), Some(filename)) = (target.parent(), target.file_name()) else {
        return Err(Error::file_write_failed(path, "path has no parent directory"));
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(filename)
        .suffix(".tmp")
        .rand_bytes(0)
        .tempfile_in(parent)
        .map_err(|e| Error::file_write_failed(path, format!("create temp: {}", e)))?;

    if let Ok(metadata) = fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| Error::file_write_failed(path, format!("copy permissions: {}", e)))?;
    }

    tmp.write_all(content.as_bytes())
        .map_err(|e| Error::file_write_failed(path, format!("write temp: {}", e)))?;

    // A failed persist drops the temp file, which removes it.
    tmp.persist(&target)
        .map_err(|e| Error::file_write_failed(path, format!("rename: {}", e.error)))?;

    Ok(())
}
