use scraper::ElementRef;

use crate::extractors::locator::FieldLocator;

/// Extracts the trimmed extension tags of an artwork, dropping empty ones.
pub fn extract_extensions(artwork: ElementRef<'_>, extensions_class: &str) -> Vec<String> {
    FieldLocator::div_with_class(extensions_class)
        .find_all(artwork)
        .into_iter()
        .map(|extension| extension.text().collect::<String>().trim().to_string())
        .filter(|extension| !extension.is_empty())
        .collect()
}
