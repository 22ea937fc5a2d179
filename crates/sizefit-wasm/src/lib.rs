//! sizefit WASM - WebAssembly bindings for sizefit
//!
//! This crate exposes the sizefit-core compression run to a browser page.
//! The page owns upload, preview and download; everything here works on
//! in-memory buffers and returns fresh ones, so concurrent calls never share
//! a file or a buffer.
//!
//! # Module Structure
//!
//! - `compress` - Decode, size-targeted encode and report in one call
//! - `types` - WASM-compatible wrapper for the compressed output
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress_image } from '@sizefit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const out = compress_image(bytes, file.name, 'PNG', 30 * 1024);
//! console.log(out.report());
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod types;

pub use compress::{compress_image, compress_image_with_config};
pub use types::JsCompressedImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Budget the upload form starts with (30 KiB).
#[wasm_bindgen]
pub fn default_target_bytes() -> f64 {
    sizefit_core::DEFAULT_TARGET_BYTES as f64
}

/// Output format names `compress_image` accepts.
#[wasm_bindgen]
pub fn supported_formats() -> Vec<String> {
    vec!["JPEG".to_string(), "PNG".to_string()]
}
