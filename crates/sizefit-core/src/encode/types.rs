//! Request, result and error types for size-targeted encoding.

use std::fmt;
use std::str::FromStr;

use image::ImageFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::ColorMode;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The requested output codec is neither lossy (JPEG) nor lossless (PNG).
    #[error("Unsupported output codec: {0}")]
    UnsupportedCodec(String),

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying codec rejected the image.
    #[error("{codec} encoding failed: {reason}")]
    EncodingFailed { codec: OutputCodec, reason: String },

    /// The quality schedule cannot drive a descent.
    #[error("Invalid quality schedule: {0}")]
    InvalidSchedule(String),
}

/// Output codec family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputCodec {
    /// JPEG, searched over quality to fit the budget.
    Lossy,
    /// PNG, one pass at maximum compression effort.
    Lossless,
}

impl OutputCodec {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputCodec::Lossy => "jpg",
            OutputCodec::Lossless => "png",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputCodec::Lossy => "image/jpeg",
            OutputCodec::Lossless => "image/png",
        }
    }

    /// The `image` crate format written for this codec.
    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputCodec::Lossy => ImageFormat::Jpeg,
            OutputCodec::Lossless => ImageFormat::Png,
        }
    }

    /// Suggested attachment name for a download, e.g. `compressed.jpg`.
    pub fn download_name(self) -> String {
        format!("compressed.{}", self.extension())
    }

    pub fn is_lossy(self) -> bool {
        self == OutputCodec::Lossy
    }
}

impl fmt::Display for OutputCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputCodec::Lossy => f.write_str("JPEG"),
            OutputCodec::Lossless => f.write_str("PNG"),
        }
    }
}

impl FromStr for OutputCodec {
    type Err = EncodeError;

    /// Parse a user-facing format name. Case and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JPEG" | "JPG" => Ok(OutputCodec::Lossy),
            "PNG" => Ok(OutputCodec::Lossless),
            _ => Err(EncodeError::UnsupportedCodec(s.to_string())),
        }
    }
}

impl TryFrom<ImageFormat> for OutputCodec {
    type Error = EncodeError;

    fn try_from(format: ImageFormat) -> Result<Self, Self::Error> {
        match format {
            ImageFormat::Jpeg => Ok(OutputCodec::Lossy),
            ImageFormat::Png => Ok(OutputCodec::Lossless),
            other => Err(EncodeError::UnsupportedCodec(format!("{other:?}"))),
        }
    }
}

/// What to encode to and how many bytes the output may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingRequest {
    pub codec: OutputCodec,
    /// Target maximum output size. Zero means the budget cannot be met.
    pub target_bytes: u64,
}

impl EncodingRequest {
    pub fn new(codec: OutputCodec, target_bytes: u64) -> Self {
        Self {
            codec,
            target_bytes,
        }
    }

    pub fn lossy(target_bytes: u64) -> Self {
        Self::new(OutputCodec::Lossy, target_bytes)
    }

    pub fn lossless(target_bytes: u64) -> Self {
        Self::new(OutputCodec::Lossless, target_bytes)
    }

    /// Build a request from a signed budget; negative budgets become 0 (unreachable).
    pub fn from_signed(codec: OutputCodec, target_bytes: i64) -> Self {
        Self::new(codec, u64::try_from(target_bytes).unwrap_or(0))
    }
}

/// Record of the colour conversion applied before a lossy encode.
///
/// JPEG stores 8-bit RGB only, so transparency is dropped (not composited onto
/// a background) and wider samples are reduced. Neither step can be undone
/// from the encoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorNormalization {
    /// Colour mode of the source before conversion.
    pub from: ColorMode,
    /// An alpha channel was present and has been discarded.
    pub alpha_discarded: bool,
    /// Samples wider than 8 bits were reduced to 8 bits.
    pub depth_reduced: bool,
}

impl ColorNormalization {
    pub fn for_mode(from: ColorMode) -> Self {
        Self {
            from,
            alpha_discarded: from.has_alpha(),
            depth_reduced: from.is_high_depth(),
        }
    }

    /// True if the source was already 8-bit RGB.
    pub fn is_identity(&self) -> bool {
        self.from == ColorMode::Rgb8
    }
}

/// Encoded output of one `encode` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingResult {
    /// Codec-encoded byte stream.
    pub bytes: Vec<u8>,
    /// Quality of the returned encoding; `None` for lossless output.
    pub quality: Option<u8>,
    pub codec: OutputCodec,
    pub target_bytes: u64,
    /// Number of full encodes performed.
    pub passes: u32,
    pub width: u32,
    pub height: u32,
    /// Colour conversion applied before a lossy encode; `None` for lossless output.
    pub normalization: Option<ColorNormalization>,
}

impl EncodingResult {
    /// Encoded byte length.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the output fits the requested budget.
    pub fn met_budget(&self) -> bool {
        (self.bytes.len() as u64) <= self.target_bytes
    }

    /// Whether transparency was dropped to produce this output.
    pub fn alpha_discarded(&self) -> bool {
        self.normalization.is_some_and(|n| n.alpha_discarded)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
