pub mod bernstein;
pub mod distance_2d;
pub mod point_ops;

pub use bernstein::{cubic_lerp, BernsteinWeights, CubicLerp};
pub use distance_2d::{centroid, distance, mean};
pub use point_ops::{operate, Operand, PointOp, ZeroDivision};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Linear interpolation `a + t * (b - a)`.
///
/// Total over all real inputs; `t` outside `[0, 1]` extrapolates.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Componentwise [`lerp`] between two points.
#[inline]
#[must_use]
pub fn lerp_point(a: &Point2, b: &Point2, t: f64) -> Point2 {
    Point2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}
