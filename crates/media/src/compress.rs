//! Re-encode uploads as WebP small enough for the media host.
//!
//! Steps: decode (format sniffed from the bytes), apply the EXIF
//! orientation, normalise the pixel layout, cap the width, then encode.
//! The WebP encoder available here is lossless, so an oversized result is
//! shrunk by downscaling rather than by lowering quality.

use std::io::Cursor;

use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, ImageDecoder, ImageReader};

use crate::error::MediaError;

/// Upload size limit of the media host.
pub const MAX_BYTES: usize = 10 * 1024 * 1024;

/// Size the encoder aims for: 93% of [`MAX_BYTES`].
pub const TARGET_BYTES: usize = MAX_BYTES * 93 / 100;

/// Wider images are scaled down to this width before encoding.
pub const MAX_WIDTH: u32 = 5000;

/// Downscaling stops at this width even if the output is still too large.
pub const MIN_WIDTH: u32 = 640;

/// Width factor applied per downscale step.
const SCALE_STEP: f64 = 0.85;

/// A WebP-encoded image.
#[derive(Debug, Clone)]
pub struct CompressedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Compress `data` to WebP under [`TARGET_BYTES`].
pub fn compress_to_webp(data: &[u8]) -> Result<CompressedImage, MediaError> {
    compress_with_budget(data, TARGET_BYTES)
}

/// [`compress_to_webp`] on the blocking thread pool.
pub async fn compress_to_webp_blocking(data: Vec<u8>) -> Result<CompressedImage, MediaError> {
    tokio::task::spawn_blocking(move || compress_to_webp(&data))
        .await
        .map_err(|e| MediaError::Task(e.to_string()))?
}

/// Compress `data` to WebP, downscaling until the output fits `budget`
/// bytes or the width reaches [`MIN_WIDTH`].
pub fn compress_with_budget(data: &[u8], budget: usize) -> Result<CompressedImage, MediaError> {
    let mut img = decode_oriented(data)?;
    img = normalize_color(img);

    if img.width() > MAX_WIDTH {
        img = scale_to_width(&img, MAX_WIDTH);
    }

    loop {
        let bytes = encode_webp(&img)?;
        if bytes.len() <= budget || img.width() <= MIN_WIDTH {
            tracing::debug!(
                width = img.width(),
                height = img.height(),
                bytes = bytes.len(),
                "Compressed image to WebP"
            );
            return Ok(CompressedImage {
                width: img.width(),
                height: img.height(),
                bytes,
            });
        }

        let next = ((f64::from(img.width()) * SCALE_STEP) as u32).max(MIN_WIDTH);
        tracing::debug!(
            from = img.width(),
            to = next,
            bytes = bytes.len(),
            budget,
            "WebP output over budget, downscaling"
        );
        img = scale_to_width(&img, next);
    }
}

/// Decode an image and rotate/flip it upright according to its EXIF data.
fn decode_oriented(data: &[u8]) -> Result<DynamicImage, MediaError> {
    let mut decoder = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Keep 8-bit grey, RGB and RGBA as they are; convert anything else to
/// RGBA when it carries alpha and RGB otherwise.
fn normalize_color(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => img,
        color if color.has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

/// Resize to `width`, preserving the aspect ratio.
fn scale_to_width(img: &DynamicImage, width: u32) -> DynamicImage {
    let height = (u64::from(img.height()) * u64::from(width) / u64::from(img.width())).max(1);
    img.resize_exact(width, height as u32, FilterType::Lanczos3)
}

fn encode_webp(img: &DynamicImage) -> Result<Vec<u8>, MediaError> {
    let mut buf = Vec::new();
    img.write_with_encoder(WebPEncoder::new_lossless(&mut buf))?;
    Ok(buf)
}
