//! Image decoding for the caller side of the encoder.
//!
//! This module provides functionality for:
//! - Decoding uploaded JPEG/PNG bytes into a [`SourceImage`]
//! - Reading dimensions of encoded output without a full decode
//!
//! The encoder itself never touches undecoded bytes; an undecodable upload
//! fails here with a [`DecodeError`] and never reaches it.
//!
//! # Examples
//!
//! ```ignore
//! use sizefit_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} {}", image.width(), image.height(), image.format_name());
//! ```

mod reader;
mod types;

pub use reader::{decode_image, probe_dimensions};
pub use types::{ColorMode, DecodeError, SourceImage};
