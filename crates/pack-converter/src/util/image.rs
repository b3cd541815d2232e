//! Image helpers shared by the texture transformers.
//!
//! All transformations work on straight RGBA8 buffers. Java packs ship PNG,
//! Bedrock accepts PNG and TGA, so those are the only codecs compiled in.

use std::io::Cursor;

use image::{imageops, ImageFormat, RgbaImage};

use crate::error::Result;

/// Decode texture bytes into an RGBA image.
///
/// The format is guessed from the magic bytes. TGA has no magic, so data
/// that cannot be guessed is retried as TGA before giving up.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
    let decoded = match image::guess_format(bytes) {
        Ok(format) => image::load_from_memory_with_format(bytes, format)?,
        Err(_) => image::load_from_memory_with_format(bytes, ImageFormat::Tga)?,
    };
    Ok(decoded.to_rgba8())
}

/// Encode an RGBA image into the given format.
pub fn encode(image: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), format)?;
    Ok(bytes)
}

/// Copy out the `width`x`height` region at (`x`, `y`).
///
/// The region is clamped to the source bounds, so asking for more than the
/// image holds yields a smaller result rather than an error.
pub fn crop(image: &RgbaImage, x: u32, y: u32, width: u32, height: u32) -> RgbaImage {
    imageops::crop_imm(image, x, y, width, height).to_image()
}

/// A fully transparent canvas.
pub fn blank(width: u32, height: u32) -> RgbaImage {
    RgbaImage::new(width, height)
}

/// Paste `top` onto `canvas` at (`x`, `y`), replacing the covered pixels.
///
/// Anything falling outside the canvas is dropped.
pub fn draw(canvas: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    imageops::replace(canvas, top, i64::from(x), i64::from(y));
}
