pub mod extract_artworks;
pub mod extract_extensions;
pub mod extract_image;
pub mod extract_images;
pub mod extract_link;
pub mod extract_name;

pub use extract_artworks::{ArtworkExtractor, ErrorPolicy, Extraction, SkippedArtwork};
pub use extract_image::ImageLookup;
pub use extract_images::{extract_image_from_script, extract_images, ImageMap};
