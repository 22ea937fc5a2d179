//! Before/after metadata for a compression run.
//!
//! The compressed side is read back from the encoded bytes, not copied from the
//! request, so a report also confirms the output is a readable image with the
//! source's dimensions.

use serde::{Deserialize, Serialize};

use crate::decode::{probe_dimensions, DecodeError, SourceImage};
use crate::encode::{EncodingResult, OutputCodec};

/// What the caller knows about the uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalInfo {
    /// Client-supplied file name, if any.
    pub name: Option<String>,
    /// Sniffed container format ("JPEG", "PNG", ...).
    pub format: String,
    /// Size of the uploaded file in bytes.
    pub size: u64,
    pub width: u32,
    pub height: u32,
}

impl OriginalInfo {
    pub fn from_upload(name: Option<String>, size: u64, image: &SourceImage) -> Self {
        Self {
            name,
            format: image.format_name(),
            size,
            width: image.width(),
            height: image.height(),
        }
    }
}

/// What came out of the encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedInfo {
    pub codec: OutputCodec,
    pub size: u64,
    pub width: u32,
    pub height: u32,
    /// `None` for lossless output.
    pub quality: Option<u8>,
    pub passes: u32,
    pub met_budget: bool,
    pub alpha_discarded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionReport {
    pub original: OriginalInfo,
    pub compressed: CompressedInfo,
    pub target_bytes: u64,
}

impl CompressionReport {
    /// Build a report, probing the encoded bytes for their dimensions.
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` if the encoded bytes cannot be read back.
    pub fn new(original: OriginalInfo, result: &EncodingResult) -> Result<Self, DecodeError> {
        let (width, height) = probe_dimensions(&result.bytes)?;

        if (width, height) != (original.width, original.height) {
            tracing::warn!(
                original = ?(original.width, original.height),
                encoded = ?(width, height),
                "encoded dimensions differ from source"
            );
        }

        Ok(Self {
            compressed: CompressedInfo {
                codec: result.codec,
                size: result.len() as u64,
                width,
                height,
                quality: result.quality,
                passes: result.passes,
                met_budget: result.met_budget(),
                alpha_discarded: result.alpha_discarded(),
            },
            target_bytes: result.target_bytes,
            original,
        })
    }

    /// Fraction of the original size saved (negative if the output grew).
    pub fn savings_ratio(&self) -> f64 {
        if self.original.size == 0 {
            return 0.0;
        }
        1.0 - self.compressed.size as f64 / self.original.size as f64
    }

    /// Whether the encoded image kept the source's pixel dimensions.
    pub fn dimensions_preserved(&self) -> bool {
        (self.original.width, self.original.height)
            == (self.compressed.width, self.compressed.height)
    }
}
