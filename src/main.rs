// ABOUTME: Main entry point for the reveal-bundle program.
// ABOUTME: Parses the command line and runs the bundling pipeline from the library.

use anyhow::Context;
use clap::Parser;
use reveal_bundle::config::{DEFAULT_DATA_SEPARATOR, DEFAULT_DATA_SEPARATOR_VERTICAL};
use reveal_bundle::{AssetBox, Config};
use std::path::PathBuf;

/// Embed Markdown slides and a local font-awesome copy into an exported reveal.js deck
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input markdown file (.md)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory of the exported deck (must contain index.html)
    #[arg(short, long)]
    output: PathBuf,

    /// Leading lines to remove from the markdown file
    #[arg(
        short = 'r',
        long = "removeLines",
        visible_alias = "removelines",
        alias = "remove-header-lines",
        default_value_t = 7
    )]
    remove_lines: usize,

    /// Horizontal slide separator
    #[arg(
        short = 'd',
        long = "dataSeparator",
        default_value = DEFAULT_DATA_SEPARATOR,
        allow_hyphen_values = true
    )]
    data_separator: String,

    /// Vertical slide separator
    #[arg(
        short = 'v',
        long = "dataSeparatorVertical",
        default_value = DEFAULT_DATA_SEPARATOR_VERTICAL,
        allow_hyphen_values = true
    )]
    data_separator_vertical: String,

    /// Image directory to copy into the output directory
    #[arg(short = 'm', long = "imageDir", visible_alias = "imagedir", default_value = "")]
    image_dir: String,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    println!("input: {}", cli.input.display());
    println!("output: {}", cli.output.display());

    let config = Config::new(cli.input, cli.output)
        .with_header_lines(cli.remove_lines)
        .with_separators(cli.data_separator, cli.data_separator_vertical)
        .with_image_dir(Some(PathBuf::from(cli.image_dir)));

    let report = reveal_bundle::run(&config, &AssetBox::font_awesome())
        .with_context(|| format!("Failed to bundle {:?}", config.output_dir))?;

    println!("Installed {} asset files", report.assets_written.len());
    if !report.section_inserted {
        println!("Warning: no markdown section was replaced in index.html");
    }
    if let Some(dir) = report.mirrored_to {
        println!("Copied images to {}", dir.display());
    }
    println!("Bundled successfully: {}", config.index_html().display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
