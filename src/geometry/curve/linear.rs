use crate::math::{lerp_point, Point2, Vector2};

use super::Curve;

/// A straight segment between two points.
///
/// The parametric form is: `P(t) = lerp(start, end, t)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearBezier {
    points: [Point2; 2],
}

impl LinearBezier {
    /// Creates a new linear curve.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            points: [start, end],
        }
    }
}

impl Curve for LinearBezier {
    fn evaluate(&self, t: f64) -> Point2 {
        lerp_point(&self.points[0], &self.points[1], t)
    }

    fn derivative(&self, _t: f64) -> Vector2 {
        self.points[1] - self.points[0]
    }

    fn control_points(&self) -> &[Point2] {
        &self.points
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn evaluates_along_segment() {
        let line = LinearBezier::new(Point2::new(0.0, 0.0), Point2::new(10.0, -20.0));
        let p = line.evaluate(0.25);
        assert_relative_eq!(p.x, 2.5);
        assert_relative_eq!(p.y, -5.0);
    }

    #[test]
    fn tangent_is_unit_direction() {
        let line = LinearBezier::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        let tan = line.tangent(0.7).unwrap();
        assert_relative_eq!(tan.x, 0.6);
        assert_relative_eq!(tan.y, 0.8);
    }

    #[test]
    fn degenerate_segment_has_no_tangent() {
        let line = LinearBezier::new(Point2::new(2.0, 2.0), Point2::new(2.0, 2.0));
        assert!(line.tangent(0.5).is_err());
    }
}
