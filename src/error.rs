use std::fmt;

/// Artwork field whose absence makes an item unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Link,
    Image,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "Name"),
            Field::Link => write!(f, "Link"),
            Field::Image => write!(f, "Image"),
        }
    }
}

/// Errors raised while extracting the gallery from a parsed document.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// No element carries the configured container class.
    #[error("No Artworks container found")]
    ContainerNotFound,

    /// A required field is missing from one gallery item.
    #[error("{0} not found")]
    FieldNotFound(Field),
}
