use crate::math::bernstein::quadratic_weights;
use crate::math::{Point2, Vector2};

use super::{Curve, QuadraticConstruction};

/// A quadratic Bezier curve with control points `[A, B, C]`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticBezier {
    points: [Point2; 3],
}

impl QuadraticBezier {
    /// Creates a new quadratic curve.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { points: [a, b, c] }
    }

    /// Runs the De Casteljau construction at `t`.
    #[must_use]
    pub fn construct(&self, t: f64) -> QuadraticConstruction {
        let [a, b, c] = &self.points;
        QuadraticConstruction::new(a, b, c, t)
    }
}

impl Curve for QuadraticBezier {
    fn evaluate(&self, t: f64) -> Point2 {
        let w = quadratic_weights(t);
        let coords = self
            .points
            .iter()
            .zip(w)
            .fold(Vector2::zeros(), |acc, (p, w)| acc + p.coords * w);
        Point2::from(coords)
    }

    fn derivative(&self, t: f64) -> Vector2 {
        let [a, b, c] = &self.points;
        ((b - a) * (1.0 - t) + (c - b) * t) * 2.0
    }

    fn control_points(&self) -> &[Point2] {
        &self.points
    }
}
