use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use crate::config::config::GalleryConfig;
use crate::error::ExtractError;
use crate::extractors::gallery::extract_extensions::extract_extensions;
use crate::extractors::gallery::extract_image::{extract_image, ImageLookup};
use crate::extractors::gallery::extract_images::ImageMap;
use crate::extractors::gallery::extract_link::extract_link;
use crate::extractors::gallery::extract_name::extract_name;
use crate::extractors::locator::FieldLocator;
use crate::models::{Artwork, ArtworksContainer};

/// How an item that fails to parse affects the whole gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Drop the item and keep going.
    Skip,
    /// Stop the extraction with the item's error.
    Abort,
}

impl ErrorPolicy {
    pub fn from_skip_on_error(skip_on_error: bool) -> Self {
        if skip_on_error {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::Abort
        }
    }

    /// Decides whether a failed item is dropped or stops the extraction.
    fn apply<T>(self, outcome: Result<T, ExtractError>) -> Result<ItemOutcome<T>, ExtractError> {
        match (outcome, self) {
            (Ok(value), _) => Ok(ItemOutcome::Kept(value)),
            (Err(error), ErrorPolicy::Skip) => Ok(ItemOutcome::Skipped(error)),
            (Err(error), ErrorPolicy::Abort) => Err(error),
        }
    }
}

enum ItemOutcome<T> {
    Kept(T),
    Skipped(ExtractError),
}

/// Gallery item dropped under [`ErrorPolicy::Skip`].
#[derive(Debug)]
pub struct SkippedArtwork {
    /// Zero-based index of the item among the gallery candidates.
    pub position: usize,
    pub error: ExtractError,
}

/// Artworks kept from one gallery, with the items that were dropped.
#[derive(Debug, Default)]
pub struct Extraction {
    pub artworks: ArtworksContainer,
    pub skipped: Vec<SkippedArtwork>,
}

impl Extraction {
    /// Operator summary of the dropped items, `None` when nothing was dropped.
    pub fn skip_report(&self) -> Option<String> {
        if self.skipped.is_empty() {
            return None;
        }

        let reasons = self
            .skipped
            .iter()
            .map(|skipped| format!("artwork {}: {}", skipped.position + 1, skipped.error))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Skipped {} artworks ({})", self.skipped.len(), reasons))
    }
}

/// Pulls the artwork gallery out of a parsed search-results page.
pub struct ArtworkExtractor<'c> {
    config: &'c GalleryConfig,
    policy: ErrorPolicy,
    lookup: ImageLookup,
}

impl<'c> ArtworkExtractor<'c> {
    pub fn new(config: &'c GalleryConfig) -> Self {
        Self {
            config,
            policy: ErrorPolicy::from_skip_on_error(config.skip_on_error),
            lookup: ImageLookup::from_require_resolved(config.require_resolved_image),
        }
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Extracts every artwork of the first gallery container, in document order.
    pub fn extract(
        &self,
        document: &Html,
        image_map: &ImageMap,
    ) -> Result<Extraction, ExtractError> {
        let container = FieldLocator::div_with_class(&self.config.artworks_class)
            .find_first(document.root_element())
            .ok_or(ExtractError::ContainerNotFound)?;

        self.extract_artworks(container, image_map)
    }

    /// Extracts the artworks of one container, applying the error policy per item.
    pub fn extract_artworks(
        &self,
        container: ElementRef<'_>,
        image_map: &ImageMap,
    ) -> Result<Extraction, ExtractError> {
        let items = FieldLocator::div_with_class(&self.config.artwork_class).find_all(container);
        debug!("Found {} artwork candidates", items.len());

        let mut artworks = Vec::with_capacity(items.len());
        let mut skipped = Vec::new();
        for (position, item) in items.into_iter().enumerate() {
            match self.policy.apply(self.extract_artwork(item, image_map))? {
                ItemOutcome::Kept(artwork) => artworks.push(artwork),
                ItemOutcome::Skipped(error) => {
                    warn!("Skipping artwork {}: {}", position + 1, error);
                    skipped.push(SkippedArtwork { position, error });
                }
            }
        }

        Ok(Extraction {
            artworks: ArtworksContainer::new(artworks),
            skipped,
        })
    }

    /// Extracts a single artwork, failing on the first missing required field.
    pub fn extract_artwork(
        &self,
        artwork: ElementRef<'_>,
        image_map: &ImageMap,
    ) -> Result<Artwork, ExtractError> {
        let name = extract_name(artwork, &self.config.name_class)?;
        let extensions = extract_extensions(artwork, &self.config.extensions_class);
        let link = extract_link(artwork, &self.config.link_prefix)?;
        let image = extract_image(artwork, image_map, self.lookup)?;

        Ok(Artwork::new(name, extensions, link, image))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Field;

    const GALLERY: &str = r#"<html><body>
        <div class="Cz5hV">
            <div class="iELo6">
                <a href="/search?q=starry"><img data-src="starry.jpg"></a>
                <div class="pgNMRc">The Starry Night</div>
                <div class="cxzHyb"> 1889 </div>
            </div>
            <div class="iELo6">
                <a href="/search?q=nameless"><img data-src="nameless.jpg"></a>
            </div>
            <div class="iELo6">
                <a href="/search?q=irises"><img id="dimg_1"></a>
                <div class="pgNMRc">Irises</div>
            </div>
        </div>
    </body></html>"#;

    fn config(skip_on_error: bool) -> GalleryConfig {
        GalleryConfig {
            skip_on_error,
            ..GalleryConfig::default()
        }
    }

    fn image_map() -> ImageMap {
        ImageMap::from([("dimg_1".to_string(), "data:image/jpeg;base64,AA==".to_string())])
    }

    #[test]
    fn skips_broken_items_in_order() {
        let config = config(true);
        let document = Html::parse_document(GALLERY);

        let extraction = ArtworkExtractor::new(&config)
            .extract(&document, &image_map())
            .unwrap();

        assert_eq!(
            extraction.artworks.artworks(),
            &[
                Artwork::new(
                    "The Starry Night".to_string(),
                    vec!["1889".to_string()],
                    "https://www.google.com/search?q=starry".to_string(),
                    "starry.jpg".to_string(),
                ),
                Artwork::new(
                    "Irises".to_string(),
                    Vec::new(),
                    "https://www.google.com/search?q=irises".to_string(),
                    "data:image/jpeg;base64,AA==".to_string(),
                ),
            ]
        );
    }

    #[test]
    fn reports_skipped_items() {
        let config = config(true);
        let document = Html::parse_document(GALLERY);

        let extraction = ArtworkExtractor::new(&config)
            .extract(&document, &image_map())
            .unwrap();

        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].position, 1);
        assert_eq!(
            extraction.skip_report().unwrap(),
            "Skipped 1 artworks (artwork 2: Name not found)"
        );
    }

    #[test]
    fn aborts_on_broken_item_when_strict() {
        let config = config(false);
        let document = Html::parse_document(GALLERY);

        let error = ArtworkExtractor::new(&config)
            .extract(&document, &image_map())
            .unwrap_err();

        assert!(matches!(error, ExtractError::FieldNotFound(Field::Name)));
    }

    #[test]
    fn reports_missing_container() {
        let config = config(true);
        let document = Html::parse_document(r#"<div class="iELo6"></div>"#);

        let error = ArtworkExtractor::new(&config)
            .extract(&document, &ImageMap::new())
            .unwrap_err();

        assert!(matches!(error, ExtractError::ContainerNotFound));
    }

    #[test]
    fn only_the_first_container_is_read() {
        let config = config(true);
        let document = Html::parse_document(
            r#"<div class="Cz5hV"></div>
            <div class="Cz5hV"><div class="iELo6">
                <div class="pgNMRc">Elsewhere</div><a href="/e"><img data-src="e.jpg"></a>
            </div></div>"#,
        );

        let extraction = ArtworkExtractor::new(&config)
            .extract(&document, &ImageMap::new())
            .unwrap();

        assert!(extraction.artworks.is_empty());
        assert!(extraction.skip_report().is_none());
    }

    #[test]
    fn unresolved_image_is_dropped_when_required() {
        let config = GalleryConfig {
            require_resolved_image: true,
            ..GalleryConfig::default()
        };
        let document = Html::parse_document(GALLERY);

        let extraction = ArtworkExtractor::new(&config)
            .extract(&document, &ImageMap::new())
            .unwrap();

        assert_eq!(extraction.artworks.len(), 1);
        assert_eq!(extraction.artworks.artworks()[0].name(), "The Starry Night");
        assert!(matches!(
            extraction.skipped[1].error,
            ExtractError::FieldNotFound(Field::Image)
        ));
    }

    #[test]
    fn policy_follows_skip_on_error() {
        assert_eq!(ErrorPolicy::from_skip_on_error(true), ErrorPolicy::Skip);
        assert_eq!(ArtworkExtractor::new(&config(false)).policy(), ErrorPolicy::Abort);
    }
}
