// ABOUTME: Directory mirroring module for the reveal-bundle application
// ABOUTME: Replaces a copy of the image directory inside the output deck

use crate::errors::{BundleError, Result};
use crate::utils;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy `source` to `<output_dir>/<name of source>`, replacing whatever was
/// there before. Returns the mirrored root.
pub fn mirror_directory(source: &Path, output_dir: &Path) -> Result<PathBuf> {
    utils::validate_directory_exists(source)?;
    let source = utils::get_absolute_path(source)?;
    let output_dir = utils::get_absolute_path(output_dir)?;

    let name = source.file_name().ok_or_else(|| {
        BundleError::ValidationError(format!("Image directory has no name: {:?}", source))
    })?;
    let target = output_dir.join(name);

    if target == source {
        info!("Image directory {:?} already lives in the output", source);
        return Ok(target);
    }
    if output_dir.starts_with(&source) {
        return Err(BundleError::ValidationError(format!(
            "Output directory {:?} is inside image directory {:?}",
            output_dir, source
        )));
    }
    if source.starts_with(&target) {
        return Err(BundleError::ValidationError(format!(
            "Image directory {:?} is inside mirror target {:?}",
            source, target
        )));
    }

    info!("Mirroring {:?} to {:?}", source, target);
    replace_directory(&target)?;
    copy_tree(&source, &target)?;
    Ok(target)
}

/// Delete `target` with everything below it, then recreate it empty.
/// Irreversible, which is why it is always announced first.
pub fn replace_directory(target: &Path) -> Result<()> {
    match fs::symlink_metadata(target) {
        Ok(meta) => {
            warn!("Removing existing {:?} before mirroring", target);
            if meta.is_dir() {
                fs::remove_dir_all(target).map_err(|e| BundleError::io(target, e))?;
            } else {
                fs::remove_file(target).map_err(|e| BundleError::io(target, e))?;
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(BundleError::io(target, e)),
    }
    fs::create_dir_all(target).map_err(|e| BundleError::io(target, e))
}

/// Recreate every directory and regular file of `source` below `target`.
pub fn copy_tree(source: &Path, target: &Path) -> Result<()> {
    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source).map_err(|_| {
            BundleError::ValidationError(format!(
                "{:?} is outside {:?}",
                entry.path(),
                source
            ))
        })?;
        let destination = target.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&destination).map_err(|e| BundleError::io(&destination, e))?;
        } else if file_type.is_file() {
            let bytes = fs::read(entry.path()).map_err(|e| BundleError::io(entry.path(), e))?;
            fs::write(&destination, &bytes).map_err(|e| BundleError::io(&destination, e))?;
            debug!("Copied {:?} ({} bytes)", relative, bytes.len());
        } else {
            warn!("Skipping {:?}: not a regular file or directory", entry.path());
        }
    }
    Ok(())
}
