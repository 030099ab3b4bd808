// ABOUTME: Utility functions for the reveal-bundle application
// ABOUTME: Provides path validation, directory creation and canonicalisation helpers

use crate::errors::{BundleError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BundleError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(BundleError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Validate that a directory exists
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BundleError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(BundleError::ValidationError(format!(
            "Path is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Create a single directory level. An existing directory is accepted,
/// anything else already sitting at `path` is an error.
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Ok(())
            } else {
                Err(BundleError::ValidationError(format!(
                    "Path exists but is not a directory: {:?}",
                    path
                )))
            }
        }
        Err(e) => Err(BundleError::io(path, e)),
    }
}

/// Get the absolute path
pub fn get_absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| BundleError::io(path, e))
}
