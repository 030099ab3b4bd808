// ABOUTME: Library module for the reveal-bundle program.
// ABOUTME: Wires the pipeline that turns an exported deck into a self-contained one.

// Reexport modules
pub mod config;
pub mod errors;
pub mod html;
pub mod markdown;
pub mod mirror;
pub mod resources;
pub mod utils;

// Reexport common types and functions
pub use config::Config;
pub use errors::{BundleError, Result};
pub use html::{insert_section, patch_html, PatchedHtml};
pub use markdown::{read_markdown, render_section, transform_markdown};
pub use mirror::{mirror_directory, replace_directory};
pub use resources::{install_assets, AssetBox, EmbeddedAsset};

use log::{info, warn};
use std::path::PathBuf;

/// What a run changed on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    pub assets_written: Vec<PathBuf>,
    pub section_inserted: bool,
    pub stylesheet_rewritten: bool,
    pub mirrored_to: Option<PathBuf>,
}

/// Run the whole pipeline. Stops at the first failure; files written up to
/// that point are left in place.
pub fn run(config: &Config, assets: &AssetBox) -> Result<BundleReport> {
    config.validate()?;

    let assets_written = install_assets(assets, &config.output_dir)?;

    let index = config.index_html();
    let placeholder = html::new_placeholder();
    let patched = patch_html(&html::read_html(&index)?, &placeholder)?;

    let blob = read_markdown(&config.input, config.header_lines)?;
    let section = render_section(
        &blob,
        &config.data_separator,
        &config.data_separator_vertical,
    );
    html::write_html_to_file(&insert_section(&patched, &placeholder, &section), &index)?;

    let mirrored_to = match &config.image_dir {
        Some(dir) if dir.is_dir() => Some(mirror_directory(dir, &config.output_dir)?),
        Some(dir) => {
            warn!("Image directory {:?} does not exist; skipping copy", dir);
            None
        }
        None => None,
    };

    info!("Bundled {:?} into {:?}", config.input, config.output_dir);
    Ok(BundleReport {
        assets_written,
        section_inserted: patched.section_found,
        stylesheet_rewritten: patched.stylesheet_rewritten,
        mirrored_to,
    })
}
