use crate::error::{GeometryError, Result};

use super::{Point2, Vector2};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (a - b).norm()
}

/// Mean position of a set of points, the point closest to all of them in
/// the least-squares sense.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyInput`] if `points` is empty.
pub fn centroid<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Result<Point2> {
    let (sum, count) = sum_coords(points);
    if count == 0 {
        return Err(GeometryError::EmptyInput("centroid of no points").into());
    }
    Ok(Point2::from(sum / f64::from(count)))
}

/// [`centroid`] of a fixed-size, non-empty set of points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean<const N: usize>(points: &[Point2; N]) -> Point2 {
    const { assert!(N > 0, "mean of no points") };
    let (sum, _) = sum_coords(points);
    Point2::from(sum / N as f64)
}

fn sum_coords<'a>(points: impl IntoIterator<Item = &'a Point2>) -> (Vector2, u32) {
    points
        .into_iter()
        .fold((Vector2::zeros(), 0), |(sum, count), p| (sum + p.coords, count + 1))
}
