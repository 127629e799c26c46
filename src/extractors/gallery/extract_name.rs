use scraper::ElementRef;

use crate::error::{ExtractError, Field};
use crate::extractors::locator::FieldLocator;

/// Extracts the artwork name, markup included, failing when the item has none.
pub fn extract_name(artwork: ElementRef<'_>, name_class: &str) -> Result<String, ExtractError> {
    FieldLocator::div_with_class(name_class)
        .find_first(artwork)
        .map(|name| name.inner_html())
        .ok_or(ExtractError::FieldNotFound(Field::Name))
}
