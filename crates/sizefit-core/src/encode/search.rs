//! Linear quality descent for lossy output.
//!
//! The first pass runs at the start quality and is accepted if it fits. After
//! that quality drops by a fixed step per pass until an encoding fits or the
//! floor has been tried. The result is therefore the highest quality on the
//! schedule that meets the budget, reached with the fewest passes a top-down
//! scan allows. At the floor the last encoding is returned even if it is still
//! too large.

use crate::config::TargetingConfig;

use super::EncodeError;

/// Outcome of a quality descent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualitySearch {
    /// Bytes of the last (accepted) pass.
    pub bytes: Vec<u8>,
    pub quality: u8,
    pub passes: u32,
}

impl QualitySearch {
    /// Whether the accepted pass fits `target_bytes`.
    pub fn fits(&self, target_bytes: u64) -> bool {
        (self.bytes.len() as u64) <= target_bytes
    }
}

/// Run the descent, calling `encode_at` once per pass.
///
/// `encode_at` must encode from the same untouched source every time; the
/// search keeps nothing between passes except the quality counter. An error
/// from `encode_at` ends the search immediately.
pub fn search_quality<F>(
    schedule: &TargetingConfig,
    target_bytes: u64,
    mut encode_at: F,
) -> Result<QualitySearch, EncodeError>
where
    F: FnMut(u8) -> Result<Vec<u8>, EncodeError>,
{
    schedule.validate()?;

    let mut quality = schedule.start_quality;
    let mut bytes = encode_at(quality)?;
    let mut passes = 1;
    tracing::debug!(quality, size = bytes.len(), target_bytes, "lossy pass");

    while (bytes.len() as u64) > target_bytes && quality > schedule.min_quality {
        quality = schedule.next_quality(quality);
        bytes = encode_at(quality)?;
        passes += 1;
        tracing::debug!(quality, size = bytes.len(), target_bytes, "lossy pass");
    }

    Ok(QualitySearch {
        bytes,
        quality,
        passes,
    })
}
