//! Content-sniffing decoder for uploaded image bytes.
//!
//! The format is guessed from the leading bytes, never from a file name, so a
//! mislabelled upload still decodes (or fails) on what it actually contains.

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, SourceImage};

/// Decode an image of any enabled format from bytes.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes (JPEG or PNG)
///
/// # Returns
///
/// A `SourceImage` keeping the decoded colour mode (alpha and bit depth
/// included) and the sniffed container format.
///
/// # Errors
///
/// Returns `DecodeError::Empty` for a zero-length input.
/// Returns `DecodeError::InvalidFormat` if the bytes match no enabled format.
/// Returns `DecodeError::CorruptedFile` if the decoder rejects the data.
pub fn decode_image(bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;

    let image = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if image.width() == 0 || image.height() == 0 {
        return Err(DecodeError::CorruptedFile(format!(
            "zero-sized image ({}x{})",
            image.width(),
            image.height()
        )));
    }

    tracing::debug!(
        format = ?format,
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded source image"
    );

    Ok(SourceImage::from_dynamic(image, Some(format)))
}

/// Read pixel dimensions from an encoded image header without decoding pixels.
///
/// Used to check an encoder's output against its input.
pub fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32), DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .into_dimensions()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}
