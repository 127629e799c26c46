pub mod artwork;
pub mod artworks_container;

pub use artwork::Artwork;
pub use artworks_container::ArtworksContainer;
