// ABOUTME: HTML patching module for the reveal-bundle application
// ABOUTME: Swaps the exported markdown section for inline slides and relinks the icon font

use crate::errors::{BundleError, Result};
use log::{info, warn};
use regex::Regex;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Section emitted by the exporter that loads `/markdown.md` at runtime.
/// Greedy on purpose: the span runs to the last `</section>` after the tag.
pub const MARKDOWN_SECTION_PATTERN: &str =
    r#"(?s)<section data-markdown="/markdown\.md" data-separator="\^\[.*</section>"#;

/// Stylesheet link pointing into the exporter's nested reveal.js copy.
pub const EXPORTED_STYLESHEET_LINK: &str =
    r#"<link rel="stylesheet" href="libs/reveal.js/font-awesome-4.7.0/css/font-awesome.min.css">"#;

/// Stylesheet link pointing at the bundled copy.
pub const LOCAL_STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="css/font-awesome.min.css">"#;

/// Result of the first patching pass over `index.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedHtml {
    pub html: String,
    pub section_found: bool,
    pub stylesheet_rewritten: bool,
}

/// Produce a marker that cannot occur in an exported deck.
pub fn new_placeholder() -> String {
    format!("<!-- reveal-bundle:{} -->", Uuid::new_v4())
}

/// Replace the exported markdown section with `placeholder` and point the
/// font-awesome stylesheet at the local copy.
pub fn patch_html(html: &str, placeholder: &str) -> Result<PatchedHtml> {
    let section = Regex::new(MARKDOWN_SECTION_PATTERN)?;

    let section_found = section.is_match(html);
    let html = if section_found {
        section
            .replace_all(html, regex::NoExpand(placeholder))
            .into_owned()
    } else {
        warn!("No exported markdown section found; slides will not be inserted");
        html.to_string()
    };

    let stylesheet_rewritten = html.contains(EXPORTED_STYLESHEET_LINK);
    let html = if stylesheet_rewritten {
        html.replace(EXPORTED_STYLESHEET_LINK, LOCAL_STYLESHEET_LINK)
    } else {
        warn!("No exported font-awesome stylesheet link found; leaving links untouched");
        html
    };

    Ok(PatchedHtml {
        html,
        section_found,
        stylesheet_rewritten,
    })
}

/// Put `section` wherever `placeholder` was left by [`patch_html`].
pub fn insert_section(patched: &PatchedHtml, placeholder: &str, section: &str) -> String {
    patched.html.replace(placeholder, section)
}

pub fn read_html(path: &Path) -> Result<String> {
    info!("Reading HTML from {:?}", path);
    fs::read_to_string(path).map_err(|e| BundleError::io(path, e))
}

/// Utility function to write HTML content to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);
    fs::write(output_path, html_content).map_err(|e| BundleError::io(output_path, e))
}
