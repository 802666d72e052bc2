mod tessellate_curve;

pub use tessellate_curve::TessellateCurve;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};
use crate::math::Point2;

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true curve, in drawing units.
    pub tolerance: f64,
    /// Minimum number of segments for curves.
    pub min_segments: usize,
    /// Maximum number of segments for curves.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.25,
            min_segments: 4,
            max_segments: 256,
        }
    }
}

impl TessellationParams {
    /// Checks that the parameters can drive a tessellation.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidParameters`] if the tolerance is not a
    /// positive number, `min_segments` is zero, or the segment limits are
    /// inverted.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(RenderError::InvalidParameters(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            ))
            .into());
        }
        if self.min_segments == 0 {
            return Err(
                RenderError::InvalidParameters("min_segments must be at least 1".to_owned()).into(),
            );
        }
        if self.min_segments > self.max_segments {
            return Err(RenderError::InvalidParameters(format!(
                "min_segments {} exceeds max_segments {}",
                self.min_segments, self.max_segments
            ))
            .into());
        }
        Ok(())
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Number of segments between consecutive vertices.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}
