use scraper::ElementRef;
use tracing::warn;

use crate::error::{ExtractError, Field};
use crate::extractors::gallery::extract_images::ImageMap;
use crate::extractors::locator::FieldLocator;

/// What to do when a deferred image id has no entry in the image map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLookup {
    /// Keep the artwork with an empty image.
    Lenient,
    /// Treat the image as missing.
    Strict,
}

impl ImageLookup {
    pub fn from_require_resolved(require_resolved_image: bool) -> Self {
        if require_resolved_image {
            ImageLookup::Strict
        } else {
            ImageLookup::Lenient
        }
    }
}

/// Extracts the artwork image.
///
/// A `data-src` attribute wins; otherwise the image `id` is looked up in the
/// map built from the page scripts.
pub fn extract_image(
    artwork: ElementRef<'_>,
    image_map: &ImageMap,
    lookup: ImageLookup,
) -> Result<String, ExtractError> {
    if let Some(source) = FieldLocator::with_attribute("img", "data-src").first_attribute(artwork) {
        return Ok(source.to_string());
    }

    // Likely deferred data
    let id = FieldLocator::with_attribute("img", "id")
        .first_attribute(artwork)
        .ok_or(ExtractError::FieldNotFound(Field::Image))?;

    match (image_map.get(id), lookup) {
        (Some(source), _) => Ok(source.clone()),
        (None, ImageLookup::Strict) => Err(ExtractError::FieldNotFound(Field::Image)),
        (None, ImageLookup::Lenient) => {
            warn!("No deferred image data for id {}", id);
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    #[test]
    fn returns_data_src() {
        let document = Html::parse_document(r#"<div><img data-src="ok.jpg" src="temp.jpg"></div>"#);

        let image = extract_image(document.root_element(), &ImageMap::new(), ImageLookup::Strict);

        assert_eq!(image.unwrap(), "ok.jpg");
    }

    #[test]
    fn data_src_wins_over_deferred_image() {
        let document = Html::parse_document(r#"<div><img id="test" data-src="ok.jpg"></div>"#);
        let image_map = ImageMap::from([("test".to_string(), "base64".to_string())]);

        let image = extract_image(document.root_element(), &image_map, ImageLookup::Strict);

        assert_eq!(image.unwrap(), "ok.jpg");
    }

    #[test]
    fn resolves_deferred_image() {
        let document = Html::parse_document(r#"<div><img id="test" src="temp.jpg"></div>"#);
        let image_map = ImageMap::from([("test".to_string(), "base64".to_string())]);

        let image = extract_image(document.root_element(), &image_map, ImageLookup::Lenient);

        assert_eq!(image.unwrap(), "base64");
    }

    #[test]
    fn unknown_id_is_empty_when_lenient() {
        let document = Html::parse_document(r#"<div><img id="/test" src="temp.jpg"></div>"#);

        let image = extract_image(document.root_element(), &ImageMap::new(), ImageLookup::Lenient);

        assert_eq!(image.unwrap(), "");
    }

    #[test]
    fn unknown_id_fails_when_strict() {
        let document = Html::parse_document(r#"<div><img id="/test" src="temp.jpg"></div>"#);

        let error = extract_image(document.root_element(), &ImageMap::new(), ImageLookup::Strict)
            .unwrap_err();

        assert_eq!(error.to_string(), "Image not found");
    }

    #[test]
    fn fails_without_image() {
        let document = Html::parse_document("<div></div>");

        let error = extract_image(document.root_element(), &ImageMap::new(), ImageLookup::Lenient)
            .unwrap_err();

        assert!(matches!(error, ExtractError::FieldNotFound(Field::Image)));
    }
}
