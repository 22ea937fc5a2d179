//! Quality schedule for the lossy descent.
//!
//! The defaults are the fixed contract: start at 85, step down by 5, stop at 10.
//! Callers may deserialize a different schedule; the default one is what
//! [`crate::encode::encode`] uses.

use serde::{Deserialize, Serialize};

use crate::encode::EncodeError;

/// First quality tried for lossy output.
pub const DEFAULT_START_QUALITY: u8 = 85;
/// Amount quality drops between passes.
pub const DEFAULT_QUALITY_STEP: u8 = 5;
/// Lowest quality the descent will try.
pub const DEFAULT_MIN_QUALITY: u8 = 10;
/// Budget used when a caller has no preference (30 KiB).
pub const DEFAULT_TARGET_BYTES: u64 = 30 * 1024;

/// Parameters of the linear quality descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetingConfig {
    /// Quality of the first pass (1 to 100)
    pub start_quality: u8,
    /// Decrement between passes (at least 1)
    pub quality_step: u8,
    /// Quality floor (1 to `start_quality`)
    pub min_quality: u8,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            start_quality: DEFAULT_START_QUALITY,
            quality_step: DEFAULT_QUALITY_STEP,
            min_quality: DEFAULT_MIN_QUALITY,
        }
    }
}

impl TargetingConfig {
    /// Create a config with the default schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the schedule can drive a descent.
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.start_quality == 0 || self.start_quality > 100 {
            return Err(EncodeError::InvalidSchedule(format!(
                "start quality {} is outside 1..=100",
                self.start_quality
            )));
        }
        if self.min_quality == 0 || self.min_quality > self.start_quality {
            return Err(EncodeError::InvalidSchedule(format!(
                "quality floor {} must be in 1..={}",
                self.min_quality, self.start_quality
            )));
        }
        if self.quality_step == 0 {
            return Err(EncodeError::InvalidSchedule(
                "quality step must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Quality following `quality` in the descent, clamped to the floor.
    #[inline]
    pub fn next_quality(&self, quality: u8) -> u8 {
        quality.saturating_sub(self.quality_step).max(self.min_quality)
    }

    /// Every quality the descent can visit, highest first.
    pub fn qualities(&self) -> Vec<u8> {
        let mut out = vec![self.start_quality];
        let mut quality = self.start_quality;
        while quality > self.min_quality {
            quality = self.next_quality(quality);
            out.push(quality);
        }
        out
    }

    /// Upper bound on encode passes for one call.
    pub fn max_passes(&self) -> u32 {
        self.qualities().len() as u32
    }
}
