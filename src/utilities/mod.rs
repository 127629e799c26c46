pub mod load_document;
pub mod write_json;
