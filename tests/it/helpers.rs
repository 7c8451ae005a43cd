//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `SessionBuilder` - Builder pattern for creating sessions with regions
//!   and a synthetic background
//! - Image fixtures: solid-color overlays and in-memory PNG bytes

use image::{Rgba, RgbaImage};
use placeboard::{OverlayImage, Session};
use std::io::Cursor;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const GRAY: [u8; 4] = [120, 120, 120, 255];

/// Builder for creating test sessions with regions and a background.
///
/// # Example
/// ```ignore
/// let session = SessionBuilder::new()
///     .with_region(10, 10, 50, 50, Some("door"))
///     .with_background(200, 200)
///     .build();
/// ```
pub struct SessionBuilder {
    lines: Vec<String>,
    background: Option<(u32, u32)>,
    opacity_percent: f32,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            background: None,
            opacity_percent: 100.0,
        }
    }

    /// Add one well-formed coordinate line.
    pub fn with_region(mut self, x1: u32, y1: u32, x2: u32, y2: u32, category: Option<&str>) -> Self {
        let mut line = format!("x1:{x1} y1:{y1} x2:{x2} y2:{y2}");
        if let Some(category) = category {
            line.push(' ');
            line.push_str(category);
        }
        self.lines.push(line);
        self
    }

    /// Give the session a solid gray background of the given size.
    pub fn with_background(mut self, width: u32, height: u32) -> Self {
        self.background = Some((width, height));
        self
    }

    pub fn with_opacity_percent(mut self, value: f32) -> Self {
        self.opacity_percent = value;
        self
    }

    pub fn build(self) -> Session {
        let mut session = Session::new();
        session.load_regions(&self.lines.join("\n"));
        if let Some((width, height)) = self.background {
            session.set_background(solid_image(width, height, GRAY));
        }
        session.set_opacity_percent(self.opacity_percent);
        session
    }
}

/// A solid-color raster of the given size.
pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// A solid-color overlay image.
pub fn solid_overlay(width: u32, height: u32, color: [u8; 4]) -> OverlayImage {
    OverlayImage::new(solid_image(width, height, color))
}

/// PNG-encoded bytes of a solid-color image, for the upload funnel.
pub fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    solid_image(width, height, color)
        .write_to(&mut bytes, image::ImageFormat::Png)
        .expect("in-memory PNG encode");
    bytes.into_inner()
}
