//! PNG encoding at maximum compression effort.
//!
//! Lossless output has nothing to trade for size, so this is always a single
//! pass. The source colour mode is kept, alpha included.

use std::borrow::Cow;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::DynamicImage;

use super::{EncodeError, OutputCodec};

/// Encode an image to PNG bytes with the strongest deflate setting and
/// adaptive per-row filtering.
///
/// 32-bit float rasters are written as 16-bit, since PNG has no float samples.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty image and
/// `EncodeError::EncodingFailed` if the PNG encoder rejects it.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let storable: Cow<'_, DynamicImage> = match image {
        DynamicImage::ImageRgb32F(_) => Cow::Owned(DynamicImage::ImageRgb16(image.to_rgb16())),
        DynamicImage::ImageRgba32F(_) => {
            Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16()))
        }
        _ => Cow::Borrowed(image),
    };

    let mut buffer = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);

    storable
        .write_with_encoder(encoder)
        .map_err(|e| EncodeError::EncodingFailed {
            codec: OutputCodec::Lossless,
            reason: e.to_string(),
        })?;

    Ok(buffer)
}
