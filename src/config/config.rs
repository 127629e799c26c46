use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub gallery: GalleryConfig,
    pub file: FileConfig,
}

/// Layout of the search-results page: every class name is matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GalleryConfig {
    pub link_prefix: String,
    pub artworks_class: String,
    pub artwork_class: String,
    pub name_class: String,
    pub extensions_class: String,
    pub skip_on_error: bool,
    /// Reject items whose deferred image id has no entry in the image map.
    #[serde(default)]
    pub require_resolved_image: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        // Class names come from the saved "van gogh paintings" results page
        Self {
            link_prefix: "https://www.google.com".to_string(),
            artworks_class: "Cz5hV".to_string(),
            artwork_class: "iELo6".to_string(),
            name_class: "pgNMRc".to_string(),
            extensions_class: "cxzHyb".to_string(),
            skip_on_error: true,
            require_resolved_image: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    pub input_path: String,
    pub output_path: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            input_path: "./files/van-gogh-paintings.html".to_string(),
            output_path: "./files/actual-array.json".to_string(),
        }
    }
}

/// Loads the configuration, layering a TOML settings file over the defaults.
///
/// An explicit `path` must exist; without one, `Settings.toml` is used if present.
pub fn load_config(path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let gallery = GalleryConfig::default();
    let file = FileConfig::default();
    let (settings_path, required) = match path {
        Some(path) => (path, true),
        None => (DEFAULT_SETTINGS_FILE, false),
    };

    let settings = Config::builder()
        .set_default("gallery.link_prefix", gallery.link_prefix)?
        .set_default("gallery.artworks_class", gallery.artworks_class)?
        .set_default("gallery.artwork_class", gallery.artwork_class)?
        .set_default("gallery.name_class", gallery.name_class)?
        .set_default("gallery.extensions_class", gallery.extensions_class)?
        .set_default("gallery.skip_on_error", gallery.skip_on_error)?
        .set_default("gallery.require_resolved_image", gallery.require_resolved_image)?
        .set_default("file.input_path", file.input_path)?
        .set_default("file.output_path", file.output_path)?
        .add_source(File::new(settings_path, FileFormat::Toml).required(required))
        .build()?;

    settings.try_deserialize::<AppConfig>()
}
