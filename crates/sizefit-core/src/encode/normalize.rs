//! Colour-mode conversion ahead of lossy encoding.

use image::RgbImage;

use super::ColorNormalization;
use crate::decode::SourceImage;

/// Convert a source image to the 8-bit RGB layout JPEG requires.
///
/// Irreversible for anything but 8-bit RGB input: the alpha channel is
/// dropped as-is (colour values are kept, nothing is composited), and 16-bit
/// or float samples are scaled down to 8 bits. The returned
/// [`ColorNormalization`] says which of these happened.
pub fn normalize_for_lossy(image: &SourceImage) -> (RgbImage, ColorNormalization) {
    let normalization = ColorNormalization::for_mode(image.color_mode());
    let rgb = image.as_dynamic().to_rgb8();
    (rgb, normalization)
}
