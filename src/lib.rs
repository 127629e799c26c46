//! Extracts the artwork gallery of a saved search-results page into JSON.

pub mod config;
pub mod error;
pub mod extract_gallery;
pub mod extractors;
pub mod models;
pub mod utilities;

pub use crate::config::config::{load_config, AppConfig, FileConfig, GalleryConfig};
pub use error::{ExtractError, Field};
pub use extract_gallery::extract_gallery;
pub use extractors::gallery::{
    extract_images, ArtworkExtractor, ErrorPolicy, Extraction, ImageLookup, ImageMap,
    SkippedArtwork,
};
pub use models::{Artwork, ArtworksContainer};
