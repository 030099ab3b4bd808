// ABOUTME: Configuration module for the reveal-bundle application
// ABOUTME: Holds the validated run settings and enforces the pre-flight checks

use crate::errors::{BundleError, Result};
use crate::utils;
use std::path::{Path, PathBuf};

pub const DEFAULT_HEADER_LINES: usize = 7;
pub const DEFAULT_DATA_SEPARATOR: &str = "---";
pub const DEFAULT_DATA_SEPARATOR_VERTICAL: &str = "--";
pub const INDEX_HTML: &str = "index.html";

/// Settings for a single bundling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Markdown source whose body becomes the slide section
    pub input: PathBuf,

    /// Exported deck directory, must already hold `index.html`
    pub output_dir: PathBuf,

    /// Number of leading Markdown lines dropped unconditionally
    pub header_lines: usize,

    /// Horizontal slide separator
    pub data_separator: String,

    /// Vertical slide separator
    pub data_separator_vertical: String,

    /// Optional image directory mirrored into the output
    pub image_dir: Option<PathBuf>,
}

impl Config {
    /// Create a configuration with the default options
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            header_lines: DEFAULT_HEADER_LINES,
            data_separator: DEFAULT_DATA_SEPARATOR.to_string(),
            data_separator_vertical: DEFAULT_DATA_SEPARATOR_VERTICAL.to_string(),
            image_dir: None,
        }
    }

    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }

    pub fn with_separators(
        mut self,
        data_separator: impl Into<String>,
        data_separator_vertical: impl Into<String>,
    ) -> Self {
        self.data_separator = data_separator.into();
        self.data_separator_vertical = data_separator_vertical.into();
        self
    }

    /// Set the image directory. An empty path means "none", matching the
    /// empty-string default of the command line.
    pub fn with_image_dir(mut self, image_dir: Option<PathBuf>) -> Self {
        self.image_dir = image_dir.filter(|dir| !dir.as_os_str().is_empty());
        self
    }

    /// Path of the deck's `index.html`
    pub fn index_html(&self) -> PathBuf {
        self.output_dir.join(INDEX_HTML)
    }

    /// Check every precondition before anything on disk is touched.
    pub fn validate(&self) -> Result<()> {
        if !is_markdown_path(&self.input) {
            return Err(BundleError::NotMarkdown(self.input.clone()));
        }
        utils::validate_file_exists(&self.input)?;
        utils::validate_directory_exists(&self.output_dir)?;

        let index = self.index_html();
        if !index.is_file() {
            return Err(BundleError::MissingIndexHtml(self.output_dir.clone()));
        }
        Ok(())
    }
}

fn is_markdown_path(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".md")
}
