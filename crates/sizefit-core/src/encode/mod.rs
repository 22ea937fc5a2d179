//! Size-targeted encoding.
//!
//! This module provides functionality for:
//! - Re-encoding an image as JPEG at the highest scheduled quality that fits a byte budget
//! - Re-encoding an image as PNG at maximum compression (budget advisory only)
//! - The single-pass JPEG/PNG primitives both paths are built on
//!
//! # Architecture
//!
//! All operations are synchronous and hold no state between calls. The
//! caller owns the decoded image and receives the encoded bytes; nothing is
//! written to disk here.
//!
//! # Examples
//!
//! ```ignore
//! use sizefit_core::decode::decode_image;
//! use sizefit_core::encode::{encode, EncodingRequest};
//!
//! let image = decode_image(&std::fs::read("photo.png").unwrap()).unwrap();
//! let result = encode(&image, &EncodingRequest::lossy(30 * 1024)).unwrap();
//! println!("{} bytes at quality {:?}", result.len(), result.quality);
//! ```

mod jpeg;
mod normalize;
mod png;
mod search;
mod target;
mod types;

#[cfg(test)]
mod test_images;

pub use jpeg::{encode_jpeg, encode_rgb_jpeg};
pub use normalize::normalize_for_lossy;
pub use png::encode_png;
pub use search::{search_quality, QualitySearch};
pub use target::{encode, encode_with_config, encode_with_format};
pub use types::{ColorNormalization, EncodeError, EncodingRequest, EncodingResult, OutputCodec};
