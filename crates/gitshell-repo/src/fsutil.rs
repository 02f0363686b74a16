//! Filesystem helpers.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Remove the directory at `path` and everything below it.
///
/// Entries are removed children first. Symbolic links are unlinked, never
/// followed. Returns `Ok(false)` without touching anything when `path` is
/// not a directory (including a symlink to one).
pub fn remove_dir(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Ok(false),
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    }

    for entry in WalkDir::new(path).contents_first(true) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(true)
}
