use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use crate::config::config::GalleryConfig;
use crate::extractors::gallery::{extract_images, ArtworkExtractor};
use crate::utilities::load_document::load_document;
use crate::utilities::write_json::write_json;

/// Extracts the artwork gallery of a saved page and writes it as JSON.
///
/// Returns `Ok(false)` without touching `output_path` when the page has no
/// gallery container, or when an item fails while `skip_on_error` is off.
/// Reading or writing files fails with `Err`.
pub fn extract_gallery(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &GalleryConfig,
) -> Result<bool> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let document = load_document(input_path)?;
    let image_map = extract_images(&document);

    let extraction = match ArtworkExtractor::new(config).extract(&document, &image_map) {
        Ok(extraction) => extraction,
        Err(error) => {
            eprintln!("{}", error.to_string().red());
            return Ok(false);
        }
    };

    if let Some(report) = extraction.skip_report() {
        eprintln!("{}", report.yellow());
    }

    write_json(output_path, &extraction.artworks)?;
    info!(
        "Wrote {} artworks from {} to {}",
        extraction.artworks.len(),
        input_path.display(),
        output_path.display()
    );

    Ok(true)
}
