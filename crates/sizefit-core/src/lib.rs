//! sizefit core - size-targeted image re-encoding
//!
//! Given a decoded image and a byte budget, this crate produces a JPEG at the
//! highest scheduled quality that fits, or a maximally compressed PNG.
//! Decoding uploads and reporting before/after metadata are provided as
//! helpers for the calling side; storage and transport are left to the caller.

pub mod config;
pub mod decode;
pub mod encode;
pub mod report;

pub use config::{TargetingConfig, DEFAULT_TARGET_BYTES};
pub use decode::{decode_image, ColorMode, DecodeError, SourceImage};
pub use encode::{
    encode, encode_with_config, EncodeError, EncodingRequest, EncodingResult, OutputCodec,
};
pub use report::{CompressionReport, OriginalInfo};

/// Errors from a full decode-encode-report run.
#[derive(Debug, thiserror::Error)]
pub enum CompressError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Output of [`compress_bytes`].
#[derive(Debug, Clone)]
pub struct Compressed {
    pub result: EncodingResult,
    pub report: CompressionReport,
}

/// Decode uploaded bytes, encode them to `format` under `target_bytes`, and
/// report on the outcome.
///
/// `format` is a user-facing name ("JPEG", "JPG", "PNG"). The codec is
/// parsed before decoding, so an unsupported format fails without touching
/// the image data.
pub fn compress_bytes(
    bytes: &[u8],
    name: Option<String>,
    format: &str,
    target_bytes: u64,
) -> Result<Compressed, CompressError> {
    compress_bytes_with_config(bytes, name, format, target_bytes, &TargetingConfig::default())
}

/// Same as [`compress_bytes`], with a caller-provided quality schedule.
pub fn compress_bytes_with_config(
    bytes: &[u8],
    name: Option<String>,
    format: &str,
    target_bytes: u64,
    config: &TargetingConfig,
) -> Result<Compressed, CompressError> {
    let codec: OutputCodec = format.parse()?;
    let source = decode_image(bytes)?;
    let original = OriginalInfo::from_upload(name, bytes.len() as u64, &source);

    let request = EncodingRequest::new(codec, target_bytes);
    let result = encode::encode_with_config(&source, &request, config)?;
    let report = CompressionReport::new(original, &result)?;

    Ok(Compressed { result, report })
}
