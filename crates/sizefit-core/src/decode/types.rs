//! Core types for image decoding.

use image::{ColorType, DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No bytes were supplied.
    #[error("Empty input: no image bytes to decode")]
    Empty,

    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Pixel layout of a decoded raster.
///
/// Mirrors the layouts the `image` crate can produce so that a caller can tell,
/// before encoding, whether the lossy path will have to drop information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMode {
    L8,
    La8,
    #[default]
    Rgb8,
    Rgba8,
    L16,
    La16,
    Rgb16,
    Rgba16,
    Rgb32F,
    Rgba32F,
}

impl ColorMode {
    /// Returns true if the mode carries a transparency channel.
    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            ColorMode::La8
                | ColorMode::Rgba8
                | ColorMode::La16
                | ColorMode::Rgba16
                | ColorMode::Rgba32F
        )
    }

    /// Returns true if samples are wider than 8 bits.
    #[inline]
    pub fn is_high_depth(self) -> bool {
        !matches!(
            self,
            ColorMode::L8 | ColorMode::La8 | ColorMode::Rgb8 | ColorMode::Rgba8
        )
    }

    /// Short label, e.g. "RGBA8".
    pub fn label(self) -> &'static str {
        match self {
            ColorMode::L8 => "L8",
            ColorMode::La8 => "LA8",
            ColorMode::Rgb8 => "RGB8",
            ColorMode::Rgba8 => "RGBA8",
            ColorMode::L16 => "L16",
            ColorMode::La16 => "LA16",
            ColorMode::Rgb16 => "RGB16",
            ColorMode::Rgba16 => "RGBA16",
            ColorMode::Rgb32F => "RGB32F",
            ColorMode::Rgba32F => "RGBA32F",
        }
    }
}

impl From<ColorType> for ColorMode {
    fn from(value: ColorType) -> Self {
        match value {
            ColorType::L8 => ColorMode::L8,
            ColorType::La8 => ColorMode::La8,
            ColorType::Rgb8 => ColorMode::Rgb8,
            ColorType::Rgba8 => ColorMode::Rgba8,
            ColorType::L16 => ColorMode::L16,
            ColorType::La16 => ColorMode::La16,
            ColorType::Rgb16 => ColorMode::Rgb16,
            ColorType::Rgba16 => ColorMode::Rgba16,
            ColorType::Rgb32F => ColorMode::Rgb32F,
            ColorType::Rgba32F => ColorMode::Rgba32F,
            // ColorType is non-exhaustive; anything new is treated as the widest 8-bit layout.
            _ => ColorMode::Rgba8,
        }
    }
}

/// A decoded raster ready to be re-encoded.
///
/// The encoder only borrows this; any colour conversion it needs produces a
/// separate buffer.
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: DynamicImage,
    format: Option<ImageFormat>,
}

impl SourceImage {
    /// Wrap an already decoded image, with the container format it came from if known.
    pub fn from_dynamic(image: DynamicImage, format: Option<ImageFormat>) -> Self {
        Self { image, format }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from(self.image.color())
    }

    pub fn has_alpha(&self) -> bool {
        self.color_mode().has_alpha()
    }

    /// Container format the bytes were sniffed as, if decoded from a file.
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Upper-case format name for display ("JPEG", "PNG", ...), or "UNKNOWN".
    pub fn format_name(&self) -> String {
        self.format
            .and_then(|f| f.extensions_str().first().copied())
            .map(|ext| match ext {
                "jpg" | "jpeg" => "JPEG".to_string(),
                other => other.to_ascii_uppercase(),
            })
            .unwrap_or_else(|| "UNKNOWN".to_string())
    }

    /// Borrow the underlying `image` crate raster.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{RgbImage, RgbaImage};

    #[test]
    fn test_color_mode_from_color_type() {
        assert_eq!(ColorMode::from(ColorType::Rgb8), ColorMode::Rgb8);
        assert_eq!(ColorMode::from(ColorType::La16), ColorMode::La16);
        assert_eq!(ColorMode::from(ColorType::Rgba32F), ColorMode::Rgba32F);
    }

    #[test]
    fn test_color_mode_alpha() {
        assert!(!ColorMode::L8.has_alpha());
        assert!(!ColorMode::Rgb16.has_alpha());
        assert!(ColorMode::La8.has_alpha());
        assert!(ColorMode::Rgba8.has_alpha());
        assert!(ColorMode::Rgba32F.has_alpha());
    }

    #[test]
    fn test_color_mode_depth() {
        assert!(!ColorMode::Rgba8.is_high_depth());
        assert!(ColorMode::L16.is_high_depth());
        assert!(ColorMode::Rgb32F.is_high_depth());
    }

    #[test]
    fn test_source_image_accessors() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(40, 30));
        let source = SourceImage::from_dynamic(img, Some(ImageFormat::Png));

        assert_eq!(source.dimensions(), (40, 30));
        assert_eq!(source.pixel_count(), 1200);
        assert_eq!(source.color_mode(), ColorMode::Rgba8);
        assert!(source.has_alpha());
        assert_eq!(source.format_name(), "PNG");
        assert!(!source.is_empty());
    }

    #[test]
    fn test_format_name_jpeg_and_unknown() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        let jpeg = SourceImage::from_dynamic(img.clone(), Some(ImageFormat::Jpeg));
        assert_eq!(jpeg.format_name(), "JPEG");

        let unknown = SourceImage::from_dynamic(img, None);
        assert_eq!(unknown.format_name(), "UNKNOWN");
    }

    #[test]
    fn test_source_image_empty() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        assert!(SourceImage::from_dynamic(img, None).is_empty());
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::CorruptedFile("truncated".to_string());
        assert_eq!(err.to_string(), "Corrupted or incomplete image file: truncated");

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
