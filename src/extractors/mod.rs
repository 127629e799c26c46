pub mod gallery;
pub mod locator;
