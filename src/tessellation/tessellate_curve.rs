use crate::error::Result;
use crate::geometry::{CubicBezier, Curve};

use super::{Polyline, TessellationParams};

/// Tessellates a cubic Bezier curve into a polyline.
///
/// The segment count comes from Wang's bound for cubics,
/// `n = ceil(sqrt(3/4 * M / tolerance))` with
/// `M = max(|A - 2B + C|, |B - 2C + D|)`, clamped to the segment limits.
/// Uniform steps in `t` with that count stay within `tolerance` of the curve.
pub struct TessellateCurve<'a> {
    curve: &'a CubicBezier,
    params: TessellationParams,
}

impl<'a> TessellateCurve<'a> {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(curve: &'a CubicBezier, params: TessellationParams) -> Self {
        Self { curve, params }
    }

    /// Number of segments the polyline will have.
    ///
    /// # Errors
    ///
    /// Returns an error if the tessellation parameters are invalid.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn segment_count(&self) -> Result<usize> {
        self.params.validate()?;
        let [a, b, c, d] = self.curve.points();
        let dd0 = (a.coords - b.coords * 2.0 + c.coords).norm();
        let dd1 = (b.coords - c.coords * 2.0 + d.coords).norm();
        let m = dd0.max(dd1);
        let n = (0.75 * m / self.params.tolerance).sqrt().ceil();
        // Saturating cast; the clamp below bounds the result.
        let n = if n.is_finite() { n as usize } else { usize::MAX };
        Ok(n.clamp(self.params.min_segments, self.params.max_segments))
    }

    /// Executes the tessellation, returning a polyline whose first and last
    /// vertices are exactly the curve's end points.
    ///
    /// # Errors
    ///
    /// Returns an error if the tessellation parameters are invalid.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Polyline> {
        let n = self.segment_count()?;
        let points = (0..=n)
            .map(|i| self.curve.evaluate(i as f64 / n as f64))
            .collect();
        Ok(Polyline { points })
    }
}
