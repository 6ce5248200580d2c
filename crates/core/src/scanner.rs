//! Source-file discovery for the batch importer.
//!
//! Walks a source directory and yields the files to import, in the order
//! the filesystem lists them. No sorting is applied: import order is
//! discovery order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// Returns `true` if `file_name` passes the extension filter.
///
/// An empty filter accepts everything. Otherwise the name must end with
/// one of the entries, compared case-insensitively. Entries may be given
/// with or without the leading dot (`".png"` and `"png"` both work).
pub fn matches_filter(file_name: &str, filters: &[String]) -> bool {
    if filters.is_empty() {
        return true;
    }
    let name = file_name.to_lowercase();
    filters
        .iter()
        .any(|ext| name.ends_with(&ext.to_lowercase()))
}

/// Discover candidate files under `source`.
///
/// Fails with [`CoreError::SourceDirectoryNotFound`] before touching any
/// entry when `source` is not an existing directory. Subdirectories are
/// descended into only when `recursive` is set, depth-first at the point
/// where they appear in the listing.
pub fn discover_files(
    source: &Path,
    filters: &[String],
    recursive: bool,
) -> Result<Vec<PathBuf>, CoreError> {
    if !source.is_dir() {
        return Err(CoreError::SourceDirectoryNotFound(
            source.display().to_string(),
        ));
    }

    let mut files = Vec::new();
    walk(source, filters, recursive, &mut files)?;
    Ok(files)
}

fn walk(
    dir: &Path,
    filters: &[String],
    recursive: bool,
    out: &mut Vec<PathBuf>,
) -> Result<(), CoreError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            if recursive {
                walk(&path, filters, recursive, out)?;
            }
            continue;
        }

        let name = entry.file_name();
        if matches_filter(&name.to_string_lossy(), filters) {
            out.push(path);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
