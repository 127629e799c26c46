use serde::Serialize;

use crate::models::Artwork;

/// Gallery in document order, serialized as `{ "artworks": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtworksContainer {
    artworks: Vec<Artwork>,
}

impl ArtworksContainer {
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self { artworks }
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
