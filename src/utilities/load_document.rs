use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use scraper::Html;

/// Reads a saved HTML page from disk and parses it.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; saved
/// pages often carry stray Latin-1 characters.
pub fn load_document(path: impl AsRef<Path>) -> Result<Html> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read HTML file: {}", path.display()))?;

    Ok(Html::parse_document(&String::from_utf8_lossy(&bytes)))
}
