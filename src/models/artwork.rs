use serde::Serialize;

/// One entry of the gallery, as written to the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artwork {
    name: String,
    // Dates and similar tags; the key is left out when there are none
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extensions: Vec<String>,
    link: String,
    image: String,
}

impl Artwork {
    pub fn new(name: String, extensions: Vec<String>, link: String, image: String) -> Self {
        Self {
            name,
            extensions,
            link,
            image,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}
