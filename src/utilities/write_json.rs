use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ArtworksContainer;

/// Writes the gallery as pretty-printed JSON, replacing any existing file.
pub fn write_json(path: impl AsRef<Path>, artworks: &ArtworksContainer) -> Result<()> {
    let path = path.as_ref();
    let json = artworks
        .to_pretty_json()
        .context("Failed to serialize artworks")?;

    fs::write(path, json).with_context(|| format!("Failed to write JSON file: {}", path.display()))
}
