//! Image fixtures encoded the way a browser submits them.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Encoded PNG bytes of a solid-colour image.
pub fn png_bytes(width: u32, height: u32, color: Rgba<u8>) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, color)),
        ImageFormat::Png,
    )
}

/// Encoded JPEG bytes of a solid-colour image (JPEG carries no alpha).
pub fn jpeg_bytes(width: u32, height: u32, color: Rgba<u8>) -> Vec<u8> {
    let rgba = RgbaImage::from_pixel(width, height, color);
    encode(
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8()),
        ImageFormat::Jpeg,
    )
}

/// `data:<mime>;base64,<payload>` envelope around arbitrary bytes.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// PNG data URL of a solid white image.
pub fn png_data_url(width: u32, height: u32) -> String {
    data_url("image/png", &png_bytes(width, height, WHITE))
}

/// Write a solid-colour overlay asset named `file_name` into `dir`.
pub fn write_overlay(dir: &Path, file_name: &str, size: u32, color: Rgba<u8>) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, png_bytes(size, size, color)).expect("write overlay fixture");
    path
}

/// Decode a stored artifact back to RGBA pixels.
pub fn read_rgba(path: impl AsRef<Path>) -> RgbaImage {
    image::open(path.as_ref())
        .expect("stored artifact should decode")
        .to_rgba8()
}

fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).expect("encode fixture image");
    out.into_inner()
}
