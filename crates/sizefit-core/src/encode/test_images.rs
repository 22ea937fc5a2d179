//! Synthetic rasters for encoder tests.

use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// Deterministic xorshift byte stream, so sizes are stable across runs.
fn byte_stream(seed: u32) -> impl FnMut() -> u8 {
    let mut state = seed.wrapping_mul(2_654_435_761).max(1);
    move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state >> 24) as u8
    }
}

pub fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ])
    })
}

/// Gradient with per-pixel noise; compresses poorly at every quality.
pub fn noise_rgb(width: u32, height: u32, seed: u32) -> RgbImage {
    let mut next = byte_stream(seed);
    RgbImage::from_fn(width, height, |x, y| {
        let base = ((x + y) % 256) as u8;
        Rgb([
            base.wrapping_add(next() / 2),
            next(),
            base.wrapping_sub(next() / 3),
        ])
    })
}

pub fn noise_rgba(width: u32, height: u32, seed: u32) -> RgbaImage {
    let mut next = byte_stream(seed);
    RgbaImage::from_fn(width, height, |x, _| {
        Rgba([next(), next(), next(), (x % 256) as u8])
    })
}
