use crate::geometry::PointLabel;
use crate::math::{cubic_lerp, mean, Point2, Vector2};

use super::{CubicConstruction, Curve};

/// A cubic Bezier curve with control points `[A, B, C, D]`.
///
/// The curve can be evaluated two ways that agree up to rounding:
/// [`construct`](Self::construct) runs the De Casteljau scaffold, and
/// [`evaluate_bernstein`](Self::evaluate_bernstein) uses the closed-form
/// Bernstein polynomials and also reports how much each control point
/// contributes to the result.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicBezier {
    points: [Point2; 4],
}

/// A cubic curve point decomposed into per-control-point contributions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveEvaluation {
    /// Parameter the curve was evaluated at.
    pub t: f64,
    /// The point on the curve.
    pub point: Point2,
    /// Weighted contribution of each control point, indexed by
    /// [`PointLabel::index`].
    pub contributions: [Vector2; 4],
}

impl CurveEvaluation {
    /// Contribution vector of the control point labelled `label`.
    #[must_use]
    pub fn contribution(&self, label: PointLabel) -> Vector2 {
        self.contributions[label.index()]
    }

    /// Iterates `(label, contribution)` in curve order.
    pub fn iter(&self) -> impl Iterator<Item = (PointLabel, Vector2)> + '_ {
        PointLabel::ALL.into_iter().zip(self.contributions.iter().copied())
    }

    /// Sums the contributions back into a point.
    ///
    /// Identical to [`point`](Self::point): both are summed in curve order.
    #[must_use]
    pub fn reconstruct(&self) -> Point2 {
        let [a, b, c, d] = self.contributions;
        Point2::new(a.x + b.x + c.x + d.x, a.y + b.y + c.y + d.y)
    }
}

impl CubicBezier {
    /// Creates a new cubic curve.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2, d: Point2) -> Self {
        Self {
            points: [a, b, c, d],
        }
    }

    /// Creates a cubic curve from control points in curve order.
    #[must_use]
    pub fn from_points(points: [Point2; 4]) -> Self {
        Self { points }
    }

    /// Returns the control point labelled `label`.
    #[must_use]
    pub fn point(&self, label: PointLabel) -> &Point2 {
        &self.points[label.index()]
    }

    /// Returns the control points in curve order.
    #[must_use]
    pub fn points(&self) -> &[Point2; 4] {
        &self.points
    }

    /// Runs the De Casteljau construction at `t`.
    #[must_use]
    pub fn construct(&self, t: f64) -> CubicConstruction {
        let [a, b, c, d] = &self.points;
        CubicConstruction::new(a, b, c, d, t)
    }

    /// Evaluates the closed-form Bernstein expansion at `t`, one axis at a
    /// time, keeping each control point's weighted contribution.
    #[must_use]
    pub fn evaluate_bernstein(&self, t: f64) -> CurveEvaluation {
        let [a, b, c, d] = &self.points;
        let x = cubic_lerp(a.x, b.x, c.x, d.x, t);
        let y = cubic_lerp(a.y, b.y, c.y, d.y, t);
        let contributions =
            std::array::from_fn(|i| Vector2::new(x.monomials[i], y.monomials[i]));
        CurveEvaluation {
            t,
            point: Point2::new(x.total, y.total),
            contributions,
        }
    }

    /// Average position of the four control points.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        mean(&self.points)
    }

    /// Returns the curve shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector2) -> Self {
        Self {
            points: self.points.map(|p| p + offset),
        }
    }

    /// Returns the curve shifted so its control point centroid is the origin.
    ///
    /// Evaluating the recentered curve makes the four contribution vectors
    /// pull in visibly different directions; adding the centroid back to the
    /// recentered point gives the original curve point.
    #[must_use]
    pub fn recentered(&self) -> Self {
        self.translated(&-self.centroid().coords)
    }
}

impl Curve for CubicBezier {
    fn evaluate(&self, t: f64) -> Point2 {
        self.evaluate_bernstein(t).point
    }

    fn derivative(&self, t: f64) -> Vector2 {
        let [a, b, c, d] = &self.points;
        let mt = 1.0 - t;
        ((b - a) * (mt * mt) + (c - b) * (2.0 * mt * t) + (d - c) * (t * t)) * 3.0
    }

    fn control_points(&self) -> &[Point2] {
        &self.points
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn diamond() -> CubicBezier {
        CubicBezier::new(
            Point2::new(0.0, -100.0),
            Point2::new(-100.0, 0.0),
            Point2::new(0.0, 100.0),
            Point2::new(100.0, 0.0),
        )
    }

    fn skewed() -> CubicBezier {
        CubicBezier::new(
            Point2::new(13.5, -7.25),
            Point2::new(-240.0, 311.0),
            Point2::new(87.125, -19.0),
            Point2::new(402.0, 55.5),
        )
    }

    fn unit_steps(n: u32) -> impl Iterator<Item = f64> {
        (0..=n).map(move |i| f64::from(i) / f64::from(n))
    }

    #[test]
    fn de_casteljau_and_bernstein_agree() {
        for curve in [diamond(), skewed()] {
            for t in unit_steps(200) {
                let a = curve.construct(t).point;
                let b = curve.evaluate_bernstein(t).point;
                assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
                assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn contributions_sum_to_point() {
        for curve in [diamond(), skewed(), skewed().recentered()] {
            for t in unit_steps(50).chain([-0.5, 1.75]) {
                let eval = curve.evaluate_bernstein(t);
                assert_eq!(eval.reconstruct(), eval.point);
            }
        }
    }

    #[test]
    fn endpoints_are_exact() {
        for curve in [diamond(), skewed()] {
            assert_eq!(curve.evaluate(0.0), *curve.point(PointLabel::A));
            assert_eq!(curve.evaluate(1.0), *curve.point(PointLabel::D));
        }
    }

    #[test]
    fn diamond_midpoint_is_average_of_second_level() {
        let curve = diamond();
        let k = curve.construct(0.5);
        let eval = curve.evaluate_bernstein(0.5);
        let mid = nalgebra::center(&k.abc, &k.bcd);
        assert_relative_eq!(k.point.x, eval.point.x);
        assert_relative_eq!(k.point.y, eval.point.y);
        assert_relative_eq!(eval.point.x, mid.x);
        assert_relative_eq!(eval.point.y, mid.y);
        assert_relative_eq!(eval.point.x, -25.0);
        assert_relative_eq!(eval.point.y, 25.0);
    }

    #[test]
    fn extrapolation_is_not_rejected() {
        let curve = skewed();
        for t in [-1.0, 2.0, 3.5] {
            let a = curve.construct(t).point;
            let b = curve.evaluate(t);
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-6);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn contribution_lookup_by_label() {
        let eval = diamond().evaluate_bernstein(0.0);
        assert_eq!(eval.contribution(PointLabel::A), Vector2::new(0.0, -100.0));
        assert_eq!(eval.contribution(PointLabel::D), Vector2::zeros());
        let labels: Vec<PointLabel> = eval.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, PointLabel::ALL.to_vec());
    }

    #[test]
    fn recentered_curve_has_origin_centroid() {
        let curve = skewed();
        let centered = curve.recentered();
        let c = centered.centroid();
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-9);

        let shift = curve.centroid().coords;
        for t in unit_steps(10) {
            let original = curve.evaluate(t);
            let restored = centered.evaluate(t) + shift;
            assert_abs_diff_eq!(original.x, restored.x, epsilon = 1e-9);
            assert_abs_diff_eq!(original.y, restored.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let curve = skewed();
        let h = 1e-6;
        for t in [0.1, 0.5, 0.9] {
            let d = curve.derivative(t);
            let fd = (curve.evaluate(t + h) - curve.evaluate(t - h)) / (2.0 * h);
            assert_abs_diff_eq!(d.x, fd.x, epsilon = 1e-3);
            assert_abs_diff_eq!(d.y, fd.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn tangent_of_collapsed_curve_fails() {
        let p = Point2::new(5.0, 5.0);
        let curve = CubicBezier::new(p, p, p, p);
        assert!(curve.tangent(0.5).is_err());
    }

    #[test]
    fn centroid_matches_math_helper() {
        let curve = skewed();
        let expected = crate::math::centroid(curve.points()).unwrap();
        assert_eq!(curve.centroid(), expected);
    }
}
