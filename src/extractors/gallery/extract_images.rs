use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use tracing::debug;

use crate::extractors::locator::FieldLocator;

/// Deferred image id -> decoded image source.
pub type ImageMap = HashMap<String, String>;

/// Call present in every script that assigns a deferred image.
pub const IMAGE_SCRIPT_MARKER: &str = "_setImagesSrc(ii,s,r);";

/// Escape sequences replaced in the image source; only `=` is known to be escaped.
const ESCAPES: &[(&str, &str)] = &[(r"\x3d", "=")];

// Example format: var ii=['_L_FkZ4qlAtyDwbkP49Pj0QU_63'];
static ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"var ii=\['([^']+)'\];").unwrap());

// Example format: var s='data:image/jpeg;base64,...';
static SOURCE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"var s='([^']+)';").unwrap());

/// Builds the image map from every `<script>` of the document.
///
/// When two scripts assign the same id, the later one wins.
pub fn extract_images(document: &Html) -> ImageMap {
    let mut image_map = ImageMap::new();

    for script in FieldLocator::tag("script").find_all(document.root_element()) {
        let script_content = script.text().collect::<String>();
        extract_image_from_script(&mut image_map, &script_content);
    }

    debug!("Resolved {} deferred images", image_map.len());
    image_map
}

/// Records the image assigned by one script, if it assigns one.
///
/// Scripts without the marker, or missing either assignment, are ignored.
pub fn extract_image_from_script(image_map: &mut ImageMap, script_content: &str) {
    if !script_content.contains(IMAGE_SCRIPT_MARKER) {
        return;
    }

    let id = ID_REGEX
        .captures(script_content)
        .and_then(|caps| caps.get(1).map(|m| m.as_str()));
    let source = SOURCE_REGEX
        .captures(script_content)
        .and_then(|caps| caps.get(1).map(|m| m.as_str()));

    if let (Some(id), Some(source)) = (id, source) {
        image_map.insert(id.to_string(), decode_escapes(source));
    }
}

/// Undoes the escaping applied to image sources inside the page scripts.
pub fn decode_escapes(source: &str) -> String {
    ESCAPES
        .iter()
        .fold(source.to_string(), |decoded, (escaped, plain)| {
            decoded.replace(escaped, plain)
        })
}
