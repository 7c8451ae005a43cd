//! Pixel-level drawing primitives on `RgbaImage`.
//!
//! All drawing clips against the surface bounds, so regions extending past
//! the background edge simply draw their visible part.

use ab_glyph::{Font as _, FontArc, PxScale, ScaleFont as _, point};
use image::{Rgba, RgbaImage};

/// Source-over blend of one pixel, with the source alpha already final.
pub(crate) fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
        return;
    }
    let [r, g, b, a] = color.0;
    if a == 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    let dst = img.get_pixel(x, y).0;
    let src_a = f32::from(a) / 255.0;
    let dst_a = f32::from(dst[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return;
    }
    let blend = |src: u8, dst: u8| {
        let src_f = f32::from(src) / 255.0;
        let dst_f = f32::from(dst) / 255.0;
        ((src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a * 255.0)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    img.put_pixel(
        x,
        y,
        Rgba([
            blend(r, dst[0]),
            blend(g, dst[1]),
            blend(b, dst[2]),
            (out_a * 255.0).round() as u8,
        ]),
    );
}

/// Fill an axis-aligned rectangle (half-open: x0..x1, y0..y1).
pub(crate) fn fill_rect(img: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
    for y in y0..y1 {
        for x in x0..x1 {
            blend_pixel(img, x, y, color);
        }
    }
}

/// Stroke an axis-aligned rectangle outline of the given thickness, drawn
/// inward from the edges.
pub(crate) fn stroke_rect(
    img: &mut RgbaImage,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    thickness: u32,
    color: Rgba<u8>,
) {
    let t = i64::from(thickness);
    // Top, bottom, left, right strips.
    fill_rect(img, x0, y0, x1, (y0 + t).min(y1), color);
    fill_rect(img, x0, (y1 - t).max(y0 + t), x1, y1, color);
    fill_rect(img, x0, (y0 + t).min(y1), (x0 + t).min(x1), (y1 - t).max(y0 + t), color);
    fill_rect(img, (x1 - t).max(x0 + t), (y0 + t).min(y1), x1, (y1 - t).max(y0 + t), color);
}

/// Draw an overlay scaled to exactly fill the destination rectangle, alpha
/// blended at `opacity` (1.0 opaque, 0.0 fully transparent).
pub(crate) fn blit_scaled(
    img: &mut RgbaImage,
    overlay: &RgbaImage,
    x0: i64,
    y0: i64,
    width: u32,
    height: u32,
    opacity: f32,
) {
    if width == 0 || height == 0 || opacity <= 0.0 {
        return;
    }
    let scaled = image::imageops::resize(
        overlay,
        width,
        height,
        image::imageops::FilterType::Triangle,
    );
    let opacity = opacity.min(1.0);
    for (dx, dy, pixel) in scaled.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let a = (f32::from(a) * opacity).round().clamp(0.0, 255.0) as u8;
        blend_pixel(img, x0 + i64::from(dx), y0 + i64::from(dy), Rgba([r, g, b, a]));
    }
}

/// Rasterize a single line of text with its baseline-ish top at `(x, y)`.
///
/// Callers that have no font simply skip their text layer.
pub(crate) fn draw_text(
    img: &mut RgbaImage,
    font: &FontArc,
    x: f32,
    y: f32,
    text: &str,
    color: Rgba<u8>,
    size: f32,
) {
    if text.is_empty() {
        return;
    }
    let scaled = font.as_scaled(PxScale::from(size));
    let mut caret = point(x, y + scaled.ascent());
    for ch in text.chars() {
        let mut glyph = scaled.scaled_glyph(ch);
        glyph.position = caret;
        caret.x += scaled.h_advance(glyph.id);
        if let Some(outlined) = scaled.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = i64::from(gx) + bounds.min.x as i64;
                let py = i64::from(gy) + bounds.min.y as i64;
                let alpha = (f32::from(color.0[3]) * coverage).round().clamp(0.0, 255.0) as u8;
                blend_pixel(img, px, py, Rgba([color.0[0], color.0[1], color.0[2], alpha]));
            });
        }
    }
}
