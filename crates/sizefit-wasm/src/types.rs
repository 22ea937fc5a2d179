//! WASM-compatible wrapper types for compression output.
//!
//! This module wraps the core result and report so JavaScript can read the
//! encoded bytes and the metadata needed to render a before/after summary.

use sizefit_core::Compressed;
use wasm_bindgen::prelude::*;

/// A compressed image for JavaScript.
///
/// # Memory Management
///
/// The encoded bytes live in WASM memory. `bytes()` copies them into a
/// `Uint8Array`; call it once and keep the copy if it is needed repeatedly.
#[wasm_bindgen]
pub struct JsCompressedImage {
    inner: Compressed,
}

#[wasm_bindgen]
impl JsCompressedImage {
    /// Encoded file bytes as a `Uint8Array` (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.result.bytes.clone()
    }

    /// Encoded size in bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.result.len()
    }

    /// JPEG quality used, or `undefined` for PNG output
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> Option<u8> {
        self.inner.result.quality
    }

    /// Number of encode passes the search needed
    #[wasm_bindgen(getter)]
    pub fn passes(&self) -> u32 {
        self.inner.result.passes
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.result.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.result.height
    }

    /// Whether the output fits the requested budget
    #[wasm_bindgen(getter)]
    pub fn met_budget(&self) -> bool {
        self.inner.result.met_budget()
    }

    /// Whether transparency was dropped to produce JPEG output
    #[wasm_bindgen(getter)]
    pub fn alpha_discarded(&self) -> bool {
        self.inner.result.alpha_discarded()
    }

    /// File extension without the dot ("jpg" or "png")
    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> String {
        self.inner.result.codec.extension().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.result.codec.mime_type().to_string()
    }

    /// Suggested download file name, e.g. "compressed.jpg"
    #[wasm_bindgen(getter)]
    pub fn download_name(&self) -> String {
        self.inner.result.codec.download_name()
    }

    /// Before/after metadata as a plain JS object.
    pub fn report(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.report)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsCompressedImage {
    pub(crate) fn from_compressed(inner: Compressed) -> Self {
        Self { inner }
    }
}

/// Convert a JavaScript number to a byte budget.
///
/// Negative numbers, zero and NaN become 0, which the encoder treats as an
/// unreachable budget. Fractions are truncated; infinity means no limit.
pub(crate) fn budget_from_f64(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        // `as` saturates, so +inf maps to u64::MAX
        value as u64
    }
}
