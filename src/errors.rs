// ABOUTME: Error types for the reveal-bundle application
// ABOUTME: Provides structured error handling for each stage of the pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    UnlocatedIo(#[from] std::io::Error),

    #[error("Path not found: {0:?}")]
    PathNotFoundError(PathBuf),

    #[error("{0:?} is not a markdown file")]
    NotMarkdown(PathBuf),

    #[error("index.html not found in {0:?}")]
    MissingIndexHtml(PathBuf),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Asset not bundled: {0}")]
    AssetNotBundled(String),

    #[error("Failed to walk directory: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Invalid section pattern: {0}")]
    PatternError(#[from] regex::Error),
}

impl BundleError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BundleError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BundleError>;
