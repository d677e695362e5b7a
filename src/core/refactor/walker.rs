//! Source tree enumeration.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

/// Extensions (without the dot) of files that are rewritten.
pub const TARGET_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Check if a file should be processed based on its extension (case-insensitive).
pub fn is_target_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| {
            TARGET_EXTENSIONS
                .iter()
                .any(|target| ext.eq_ignore_ascii_case(target))
        })
        .unwrap_or(false)
}

/// Lazily enumerate target files under `root`.
///
/// Directories whose name is in `skip_dirs` are pruned at any depth (the root
/// itself is never pruned). A symlink to a regular file is yielded; symlinked
/// directories are not descended into. Entries are visited in file-name order.
/// Unreadable entries are logged and skipped.
pub fn enumerate<'a>(
    root: &Path,
    skip_dirs: &'a [String],
) -> Result<impl Iterator<Item = PathBuf> + 'a> {
    if !root.is_dir() {
        return Err(Error::root_not_found(root));
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !is_skipped_dir(entry, skip_dirs));

    Ok(walker
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                crate::log_status!("walk", "Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| is_regular_file(entry) && is_target_file(entry.path()))
        .map(DirEntry::into_path))
}

fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        entry.path().is_file()
    } else {
        entry.file_type().is_file()
    }
}

fn is_skipped_dir(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| skip_dirs.iter().any(|skip| skip == name))
}
