//! JPEG encoding, one pass at a fixed quality.
//!
//! This is the lossy codec the quality search drives. Each call encodes from
//! the pixels it is given, so re-running it at a lower quality never stacks
//! generational loss.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use super::{EncodeError, OutputCodec};

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality, clamped to 1-100
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for a zero width or height,
/// `EncodeError::InvalidPixelData` if the buffer length is not `width * height * 3`,
/// and `EncodeError::EncodingFailed` if the encoder rejects the image
/// (e.g. a side longer than 65535).
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Vec::with_capacity(expected_len / 8);
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            codec: OutputCodec::Lossy,
            reason: e.to_string(),
        })?;

    Ok(buffer)
}

/// Encode an `RgbImage` to JPEG bytes at `quality`.
pub fn encode_rgb_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(image.as_raw(), image.width(), image.height(), quality)
}
