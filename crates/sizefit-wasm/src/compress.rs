//! Compression WASM bindings.
//!
//! This module exposes the sizefit-core decode-encode-report run to
//! JavaScript. The page hands over the uploaded file bytes, a format name and
//! a byte budget, and gets back the encoded file plus its metadata.
//!
//! # Functions
//!
//! - [`compress_image`] - Compress with the default quality schedule
//! - [`compress_image_with_config`] - Compress with a custom schedule object
//!
//! # Example
//!
//! ```typescript
//! import { compress_image, default_target_bytes } from '@sizefit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const out = compress_image(bytes, file.name, 'JPEG', default_target_bytes());
//! console.log(`${out.byte_length} bytes at quality ${out.quality}`);
//! const blob = new Blob([out.bytes()], { type: out.mime_type });
//! ```

use crate::types::{budget_from_f64, JsCompressedImage};
use sizefit_core::{compress_bytes, compress_bytes_with_config, TargetingConfig};
use wasm_bindgen::prelude::*;

/// Decode `bytes`, re-encode them as `format` ("JPEG" or "PNG") under
/// `target_bytes`, and return the encoded file with its metadata.
///
/// # Arguments
///
/// * `bytes` - The uploaded file as a `Uint8Array` (JPEG or PNG)
/// * `name` - Original file name, echoed in the report (may be `undefined`)
/// * `format` - Output format name, case-insensitive ("JPEG", "JPG", "PNG")
/// * `target_bytes` - Byte budget; values ≤ 0 or NaN mean "as small as possible"
///
/// # Errors
///
/// Returns an error if the format is unsupported, the upload cannot be
/// decoded, or the encoder rejects the image. An unmet budget is not an
/// error; check `met_budget` on the result.
#[wasm_bindgen]
pub fn compress_image(
    bytes: &[u8],
    name: Option<String>,
    format: &str,
    target_bytes: f64,
) -> Result<JsCompressedImage, JsValue> {
    compress_bytes(bytes, name, format, budget_from_f64(target_bytes))
        .map(JsCompressedImage::from_compressed)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Like [`compress_image`], with a quality schedule object
/// `{ start_quality, quality_step, min_quality }`. Missing fields take their defaults.
#[wasm_bindgen]
pub fn compress_image_with_config(
    bytes: &[u8],
    name: Option<String>,
    format: &str,
    target_bytes: f64,
    config: JsValue,
) -> Result<JsCompressedImage, JsValue> {
    let config: TargetingConfig = if config.is_undefined() || config.is_null() {
        TargetingConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    compress_bytes_with_config(bytes, name, format, budget_from_f64(target_bytes), &config)
        .map(JsCompressedImage::from_compressed)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
