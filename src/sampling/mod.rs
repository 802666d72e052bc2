mod sample_cache;

pub use sample_cache::SampleCache;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SamplingError};

/// The sampled interval of the variable parameter and its quantization step.
///
/// Samples sit at `min + k * step` for `k = 0, 1, …` while the value stays
/// at or below `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SampleRange {
    /// Upper bound on the number of samples a range may generate.
    pub const MAX_SAMPLES: usize = 100_000;

    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        let range = Self { min, max, step };
        range.validate()?;
        Ok(range)
    }

    /// Checks that the range is usable for sampling.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidRange`] if a bound is not finite,
    /// `min > max`, `step` is not positive, or the range would generate more
    /// than [`MAX_SAMPLES`](Self::MAX_SAMPLES) samples.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || !self.step.is_finite() {
            return Err(SamplingError::InvalidRange(format!(
                "bounds must be finite, got min={} max={} step={}",
                self.min, self.max, self.step
            ))
            .into());
        }
        if self.min > self.max {
            return Err(SamplingError::InvalidRange(format!(
                "min {} is greater than max {}",
                self.min, self.max
            ))
            .into());
        }
        if self.step <= 0.0 {
            return Err(SamplingError::InvalidRange(format!(
                "step must be positive, got {}",
                self.step
            ))
            .into());
        }
        if (self.max - self.min) / self.step >= Self::MAX_SAMPLES as f64 {
            return Err(SamplingError::InvalidRange(format!(
                "range [{}, {}] with step {} exceeds {} samples",
                self.min,
                self.max,
                self.step,
                Self::MAX_SAMPLES
            ))
            .into());
        }
        Ok(())
    }

    /// Number of samples inside the range. Assumes a validated range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample_count(&self) -> usize {
        ((self.max - self.min) / self.step + 1e-9).floor() as usize + 1
    }

    /// Quantizes `t` to the index of its nearest sample. Values outside the
    /// range map to indices outside `0..sample_count()`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn quantize(&self, t: f64) -> i64 {
        ((t - self.min) / self.step).round() as i64
    }

    /// Parameter value of the sample at `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value_at(&self, index: i64) -> f64 {
        self.min + index as f64 * self.step
    }

    /// Iterates the sample parameters in ascending order.
    #[allow(clippy::cast_possible_wrap)]
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.sample_count()).map(|i| self.value_at(i as i64))
    }
}
