//! Error types for data operations
//!
//! Provides unified error handling for loading the coordinate file, the
//! background image, and uploaded overlay images. All of these are caught at
//! the session boundary and converted into a status message; none of them
//! terminate the session.

use thiserror::Error;

/// Errors that can occur while loading coordinates or images
#[derive(Error, Debug)]
pub enum LoadError {
    /// IO error from std::io (unreadable coordinate or image file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Background or overlay image failed to decode
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// Upload with a declared media type outside `image/*`
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// Label font bytes do not parse as a font
    #[error("invalid label font: {0}")]
    InvalidFont(#[from] ab_glyph::InvalidFont),
}

/// Errors that can occur while rendering a frame
#[derive(Error, Debug)]
pub enum RenderError {
    /// No decoded background image is available to size the surface
    #[error("no background image loaded")]
    MissingBackground,
}

/// Result type alias for load operations
pub type LoadResult<T> = Result<T, LoadError>;
