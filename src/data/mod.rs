//! Data loading: coordinate-file parsing and image decoding.

pub mod coords_parser;
pub mod error;
pub mod image_loader;

pub use coords_parser::parse_coordinates;
pub use error::{LoadError, LoadResult, RenderError};
pub use image_loader::{decode_overlay, is_image_media_type, load_background};
