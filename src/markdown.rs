// ABOUTME: Markdown transformation module for the reveal-bundle application
// ABOUTME: Strips header lines, re-indents the body and wraps it in a slide section

use crate::errors::{BundleError, Result};
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Indentation put in front of every retained Markdown line.
pub const LINE_INDENT: &str = "                    ";

/// Read a Markdown file and turn it into an indented text blob.
pub fn read_markdown(path: &Path, header_lines: usize) -> Result<String> {
    info!("Reading markdown from {:?}", path);
    let file = File::open(path).map_err(|e| BundleError::io(path, e))?;
    transform_markdown(BufReader::new(file), header_lines).map_err(|e| match e {
        BundleError::UnlocatedIo(source) => BundleError::io(path, source),
        other => other,
    })
}

/// Drop `header_lines` lines, then any empty lines up to the first line with
/// content, and indent everything that is left. Header lines are skipped as
/// raw bytes, only retained lines have to be UTF-8.
pub fn transform_markdown<R: BufRead>(mut reader: R, header_lines: usize) -> Result<String> {
    let mut blob = String::new();
    let mut skipping_top_empty_lines = true;
    let mut raw = Vec::new();
    let mut lines_read = 0;

    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        lines_read += 1;
        if lines_read <= header_lines {
            continue;
        }

        let line = decode_line(&raw)?;
        if skipping_top_empty_lines && line.is_empty() {
            continue;
        }
        skipping_top_empty_lines = false;

        blob.push_str(LINE_INDENT);
        blob.push_str(line);
        blob.push('\n');
    }

    Ok(blob)
}

/// Strip the `\n` or `\r\n` terminator and check the rest is UTF-8.
fn decode_line(raw: &[u8]) -> io::Result<&str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Build the `<section>` that reveal.js renders from inline Markdown.
///
/// The separators end up inside a regular expression on the reveal.js side,
/// so `\n` is written as a literal backslash sequence.
pub fn render_section(blob: &str, data_separator: &str, data_separator_vertical: &str) -> String {
    format!(
        concat!(
            r#"<section data-markdown data-separator="^\n{sep}$" data-separator-vertical="^\n{vsep}$">"#,
            "\n    <textarea data-template>\n",
            "{blob}\n",
            "    </textarea>\n",
            "</section>"
        ),
        sep = data_separator,
        vsep = data_separator_vertical,
        blob = blob,
    )
}
