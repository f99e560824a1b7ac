//! Filesystem helpers shared by every writer.

use crate::utils::error::OutputError;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// True when `path` is an existing directory.
///
/// Never fails: any error while checking counts as "does not exist".
pub fn directory_exists(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Make sure `path` exists as a directory, creating missing parents.
///
/// Calling it for an existing directory is a no-op.
pub fn ensure_directory(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() || directory_exists(path) {
        return Ok(());
    }

    debug!("Creating directory: {}", path.display());
    fs::create_dir_all(path)
}

/// Validate that an output path is writable
///
/// **Public** - used by all report writers
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate `path` and create its parent directories
pub fn prepare_output(path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;

    if let Some(parent) = path.parent() {
        ensure_directory(parent).map_err(|e| {
            OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
        })?;
    }

    Ok(())
}

/// File size in bytes, 0 if unknown
pub fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
