use scraper::ElementRef;

use crate::error::{ExtractError, Field};
use crate::extractors::locator::FieldLocator;

/// Extracts the first anchor `href` of the artwork, appended to `link_prefix` as-is.
pub fn extract_link(artwork: ElementRef<'_>, link_prefix: &str) -> Result<String, ExtractError> {
    FieldLocator::with_attribute("a", "href")
        .first_attribute(artwork)
        .map(|href| format!("{}{}", link_prefix, href))
        .ok_or(ExtractError::FieldNotFound(Field::Link))
}
