// ABOUTME: Embedded icon-font assets for the reveal-bundle application
// ABOUTME: Bundles font-awesome at build time and installs it into the output deck

use crate::errors::{BundleError, Result};
use crate::utils;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Sub-directories of the output deck that receive the bundled assets.
pub const ASSET_DIRS: [&str; 2] = ["css", "fonts"];

/// Logical name of the bundled stylesheet, relative to the output directory.
pub const FONT_AWESOME_CSS: &str = "css/font-awesome.min.css";

macro_rules! font_awesome_asset {
    ($name:literal) => {
        EmbeddedAsset {
            name: $name,
            bytes: include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/font-awesome-4.7.0/",
                $name
            )),
        }
    };
}

/// A file compiled into the binary, addressed by its path inside the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedAsset {
    pub name: &'static str,
    pub bytes: &'static [u8],
}

/// Read-only set of assets shipped with the tool.
#[derive(Debug, Clone)]
pub struct AssetBox {
    assets: Vec<EmbeddedAsset>,
}

impl AssetBox {
    pub fn new(assets: Vec<EmbeddedAsset>) -> Self {
        Self { assets }
    }

    /// The font-awesome 4.7.0 stylesheet and its five font files.
    pub fn font_awesome() -> Self {
        Self::new(vec![
            font_awesome_asset!("css/font-awesome.min.css"),
            font_awesome_asset!("fonts/fontawesome-webfont.svg"),
            font_awesome_asset!("fonts/FontAwesome.otf"),
            font_awesome_asset!("fonts/fontawesome-webfont.woff2"),
            font_awesome_asset!("fonts/fontawesome-webfont.woff"),
            font_awesome_asset!("fonts/fontawesome-webfont.eot"),
        ])
    }

    pub fn assets(&self) -> &[EmbeddedAsset] {
        &self.assets
    }

    /// Look up an asset's content by logical name.
    pub fn find(&self, name: &str) -> Result<&'static [u8]> {
        self.assets
            .iter()
            .find(|asset| asset.name == name)
            .map(|asset| asset.bytes)
            .ok_or_else(|| BundleError::AssetNotBundled(name.to_string()))
    }
}

/// Write every asset of `assets` below `output_dir`, overwriting existing files.
/// Returns the written paths in bundle order.
pub fn install_assets(assets: &AssetBox, output_dir: &Path) -> Result<Vec<PathBuf>> {
    for dir in ASSET_DIRS {
        utils::ensure_directory_exists(&output_dir.join(dir))?;
    }

    let mut written = Vec::with_capacity(assets.assets().len());
    for asset in assets.assets() {
        let target = output_dir.join(asset.name);
        if let Some(parent) = target.parent() {
            if !parent.is_dir() {
                fs::create_dir_all(parent).map_err(|e| BundleError::io(parent, e))?;
            }
        }
        fs::write(&target, asset.bytes).map_err(|e| BundleError::io(&target, e))?;
        info!("Installed asset {} ({} bytes)", asset.name, asset.bytes.len());
        written.push(target);
    }

    Ok(written)
}
