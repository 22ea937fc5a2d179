//! Size-targeted encoding: the entry point callers use.

use crate::config::TargetingConfig;
use crate::decode::SourceImage;

use super::jpeg::encode_rgb_jpeg;
use super::normalize::normalize_for_lossy;
use super::png::encode_png;
use super::search::search_quality;
use super::{EncodeError, EncodingRequest, EncodingResult, OutputCodec};

/// Re-encode `image` to fit `request.target_bytes`, using the default quality schedule.
///
/// Lossy requests convert the image to 8-bit RGB (see [`normalize_for_lossy`])
/// and search quality downward from 85 in steps of 5, stopping at the first
/// pass that fits or at quality 10. Lossless requests run one PNG pass and
/// return it whatever its size.
///
/// An unmet budget is not an error: check [`EncodingResult::met_budget`].
pub fn encode(
    image: &SourceImage,
    request: &EncodingRequest,
) -> Result<EncodingResult, EncodeError> {
    encode_with_config(image, request, &TargetingConfig::default())
}

/// Same as [`encode`], with a caller-provided quality schedule for the lossy path.
pub fn encode_with_config(
    image: &SourceImage,
    request: &EncodingRequest,
    config: &TargetingConfig,
) -> Result<EncodingResult, EncodeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let result = match request.codec {
        OutputCodec::Lossy => encode_lossy(image, request.target_bytes, config)?,
        OutputCodec::Lossless => encode_lossless(image, request.target_bytes)?,
    };

    tracing::info!(
        codec = %result.codec,
        width,
        height,
        size = result.len(),
        target_bytes = result.target_bytes,
        quality = ?result.quality,
        passes = result.passes,
        met_budget = result.met_budget(),
        "encoded image"
    );

    Ok(result)
}

/// Parse `format` ("JPEG", "JPG", "PNG", any case) and encode.
///
/// Any other format name fails with [`EncodeError::UnsupportedCodec`].
pub fn encode_with_format(
    image: &SourceImage,
    format: &str,
    target_bytes: u64,
) -> Result<EncodingResult, EncodeError> {
    let codec: OutputCodec = format.parse()?;
    encode(image, &EncodingRequest::new(codec, target_bytes))
}

fn encode_lossy(
    image: &SourceImage,
    target_bytes: u64,
    config: &TargetingConfig,
) -> Result<EncodingResult, EncodeError> {
    let (rgb, normalization) = normalize_for_lossy(image);
    if normalization.alpha_discarded {
        tracing::warn!(
            from = normalization.from.label(),
            "discarding alpha channel for lossy output"
        );
    }

    let search = search_quality(config, target_bytes, |quality| encode_rgb_jpeg(&rgb, quality))?;

    if !search.fits(target_bytes) {
        tracing::warn!(
            quality = search.quality,
            size = search.bytes.len(),
            target_bytes,
            "quality floor reached without meeting budget"
        );
    }

    Ok(EncodingResult {
        bytes: search.bytes,
        quality: Some(search.quality),
        codec: OutputCodec::Lossy,
        target_bytes,
        passes: search.passes,
        width: rgb.width(),
        height: rgb.height(),
        normalization: Some(normalization),
    })
}

fn encode_lossless(
    image: &SourceImage,
    target_bytes: u64,
) -> Result<EncodingResult, EncodeError> {
    let bytes = encode_png(image.as_dynamic())?;

    if bytes.len() as u64 > target_bytes {
        tracing::debug!(
            size = bytes.len(),
            target_bytes,
            "lossless output exceeds budget; returned as-is"
        );
    }

    Ok(EncodingResult {
        bytes,
        quality: None,
        codec: OutputCodec::Lossless,
        target_bytes,
        passes: 1,
        width: image.width(),
        height: image.height(),
        normalization: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TARGET_BYTES;
    use crate::decode::{decode_image, probe_dimensions};
    use crate::encode::test_images::{gradient_rgb, noise_rgb, noise_rgba, solid_rgb};
    use image::{DynamicImage, ImageFormat};

    fn rgb_source(img: image::RgbImage) -> SourceImage {
        SourceImage::from_dynamic(DynamicImage::ImageRgb8(img), Some(ImageFormat::Png))
    }

    #[test]
    fn test_small_solid_image_single_pass() {
        let source = rgb_source(solid_rgb(100, 100, [40, 90, 200]));
        let result = encode(&source, &EncodingRequest::lossy(DEFAULT_TARGET_BYTES)).unwrap();

        assert_eq!(result.quality, Some(85));
        assert_eq!(result.passes, 1);
        assert!(result.met_budget());
        assert!(result.normalization.unwrap().is_identity());
    }

    #[test]
    fn test_noisy_rgba_descends() {
        let source = SourceImage::from_dynamic(
            DynamicImage::ImageRgba8(noise_rgba(400, 300, 11)),
            Some(ImageFormat::Png),
        );
        let result = encode(&source, &EncodingRequest::lossy(DEFAULT_TARGET_BYTES)).unwrap();

        let quality = result.quality.unwrap();
        assert!(result.passes >= 2);
        assert!(quality < 85);
        assert!(result.met_budget() || quality == 10);
        assert!(result.alpha_discarded());
        assert_eq!((result.width, result.height), (400, 300));
    }

    #[test]
    fn test_returns_highest_fitting_grid_quality() {
        let rgb = noise_rgb(160, 120, 5);
        let at = |q: u8| encode_rgb_jpeg(&rgb, q).unwrap().len() as u64;
        // Budget between the q60 and q85 sizes forces a real descent
        let target = (at(60) + at(85)) / 2;

        let result = encode(&rgb_source(rgb.clone()), &EncodingRequest::lossy(target)).unwrap();
        let quality = result.quality.unwrap();

        assert!(result.passes >= 2);
        assert_eq!((85 - quality) % 5, 0);
        assert!(result.len() as u64 <= target || quality == 10);
        for higher in (quality + 5..=85).step_by(5) {
            assert!(at(higher) > target, "q{higher} fits but search went to q{quality}");
        }
    }

    #[test]
    fn test_zero_budget_reaches_floor() {
        let source = rgb_source(gradient_rgb(64, 64));
        let result = encode(&source, &EncodingRequest::lossy(0)).unwrap();

        assert_eq!(result.quality, Some(10));
        assert_eq!(result.passes, 16);
        assert!(!result.met_budget());
        assert!(!result.is_empty());
    }

    #[test]
    fn test_lossless_ignores_tiny_budget() {
        let source = rgb_source(gradient_rgb(50, 40));
        let result = encode(&source, &EncodingRequest::lossless(1)).unwrap();

        assert_eq!(result.quality, None);
        assert_eq!(result.passes, 1);
        assert!(result.len() > 1);
        assert!(!result.met_budget());
        assert!(result.normalization.is_none());
    }

    #[test]
    fn test_lossless_keeps_alpha() {
        let rgba = noise_rgba(20, 20, 2);
        let source = SourceImage::from_dynamic(DynamicImage::ImageRgba8(rgba.clone()), None);
        let result = encode(&source, &EncodingRequest::lossless(DEFAULT_TARGET_BYTES)).unwrap();

        let decoded = decode_image(&result.bytes).unwrap();
        assert!(decoded.has_alpha());
        assert_eq!(decoded.as_dynamic().to_rgba8(), rgba);
        assert!(!result.alpha_discarded());
    }

    #[test]
    fn test_round_trip_dimensions() {
        let source = rgb_source(noise_rgb(73, 41, 1));
        for request in [
            EncodingRequest::lossy(2_000),
            EncodingRequest::lossless(2_000),
        ] {
            let result = encode(&source, &request).unwrap();
            assert_eq!(probe_dimensions(&result.bytes).unwrap(), (73, 41));
        }
    }

    #[test]
    fn test_encode_with_format() {
        let source = rgb_source(solid_rgb(8, 8, [0, 0, 0]));

        let result = encode_with_format(&source, "png", 1).unwrap();
        assert_eq!(result.codec, OutputCodec::Lossless);

        let result = encode_with_format(&source, "JPEG", DEFAULT_TARGET_BYTES).unwrap();
        assert_eq!(result.codec, OutputCodec::Lossy);
        assert_eq!(&result.bytes[0..2], &[0xFF, 0xD8]);

        assert!(matches!(
            encode_with_format(&source, "tiff", DEFAULT_TARGET_BYTES),
            Err(EncodeError::UnsupportedCodec(_))
        ));
    }

    #[test]
    fn test_custom_schedule() {
        let source = rgb_source(gradient_rgb(32, 32));
        let mut config = TargetingConfig::default();
        config.start_quality = 95;
        config.quality_step = 40;

        let result = encode_with_config(&source, &EncodingRequest::lossy(0), &config).unwrap();
        // 95, 55, 15, then the floor
        assert_eq!(result.passes, 4);
        assert_eq!(result.quality, Some(10));
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let empty = DynamicImage::ImageRgb8(image::RgbImage::new(0, 0));
        let source = SourceImage::from_dynamic(empty, None);
        assert!(matches!(
            encode(&source, &EncodingRequest::lossy(100)),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    /// Full-size camera frame; slow in debug builds.
    #[test]
    #[ignore]
    fn test_large_rgba_frame_descends() {
        let source = SourceImage::from_dynamic(
            DynamicImage::ImageRgba8(noise_rgba(4000, 3000, 42)),
            Some(ImageFormat::Png),
        );
        let result = encode(&source, &EncodingRequest::lossy(30_720)).unwrap();

        assert!(result.passes >= 2);
        assert!(result.quality.unwrap() < 85);
        assert!(result.len() <= 30_720 || result.quality == Some(10));
    }
}
