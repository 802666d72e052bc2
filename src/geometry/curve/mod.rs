mod cubic;
mod de_casteljau;
mod linear;
mod quadratic;

pub use cubic::{CubicBezier, CurveEvaluation};
pub use de_casteljau::{de_casteljau_levels, CubicConstruction, QuadraticConstruction};
pub use linear::LinearBezier;
pub use quadratic::QuadraticBezier;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The unit interval every Bezier curve is drawn over.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Returns whether `t` lies inside the domain.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        (self.t_min..=self.t_max).contains(&t)
    }
}

/// Trait for parametric Bezier curves in the plane.
///
/// Evaluation is total: a `t` outside [`domain`](Curve::domain) extrapolates
/// the polynomial instead of failing.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// First derivative with respect to `t`.
    fn derivative(&self, t: f64) -> Vector2;

    /// The control points defining the curve, in curve order.
    fn control_points(&self) -> &[Point2];

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] where the derivative vanishes.
    fn tangent(&self, t: f64) -> Result<Vector2> {
        let d = self.derivative(t);
        let len = d.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(d / len)
    }

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }
}
