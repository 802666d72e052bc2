use crate::error::{GeometryError, Result};
use crate::math::{lerp_point, Point2};

/// The construction scaffold of a cubic curve at one parameter value.
///
/// Level one interpolates the control polygon, level two interpolates level
/// one, and [`point`](Self::point) interpolates level two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicConstruction {
    pub ab: Point2,
    pub bc: Point2,
    pub cd: Point2,
    pub abc: Point2,
    pub bcd: Point2,
    /// The curve point `ABCD`.
    pub point: Point2,
}

impl CubicConstruction {
    /// Runs the construction for control points `a..d` at `t`.
    #[must_use]
    pub fn new(a: &Point2, b: &Point2, c: &Point2, d: &Point2, t: f64) -> Self {
        let ab = lerp_point(a, b, t);
        let bc = lerp_point(b, c, t);
        let cd = lerp_point(c, d, t);
        let abc = lerp_point(&ab, &bc, t);
        let bcd = lerp_point(&bc, &cd, t);
        let point = lerp_point(&abc, &bcd, t);
        Self {
            ab,
            bc,
            cd,
            abc,
            bcd,
            point,
        }
    }

    /// The three first-level points `[AB, BC, CD]`.
    #[must_use]
    pub fn first_level(&self) -> [Point2; 3] {
        [self.ab, self.bc, self.cd]
    }

    /// The two second-level points `[ABC, BCD]`.
    #[must_use]
    pub fn second_level(&self) -> [Point2; 2] {
        [self.abc, self.bcd]
    }

    /// All five intermediate points, first level then second.
    #[must_use]
    pub fn intermediate_points(&self) -> [Point2; 5] {
        [self.ab, self.bc, self.cd, self.abc, self.bcd]
    }

    /// Segments joining the intermediate points of each level.
    #[must_use]
    pub fn scaffold_lines(&self) -> [(Point2, Point2); 3] {
        [
            (self.ab, self.bc),
            (self.bc, self.cd),
            (self.abc, self.bcd),
        ]
    }
}

/// The construction scaffold of a quadratic curve at one parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticConstruction {
    pub ab: Point2,
    pub bc: Point2,
    /// The curve point `ABC`.
    pub point: Point2,
}

impl QuadraticConstruction {
    /// Runs the construction for control points `a..c` at `t`.
    #[must_use]
    pub fn new(a: &Point2, b: &Point2, c: &Point2, t: f64) -> Self {
        let ab = lerp_point(a, b, t);
        let bc = lerp_point(b, c, t);
        Self {
            ab,
            bc,
            point: lerp_point(&ab, &bc, t),
        }
    }
}

/// Runs the construction on any number of points.
///
/// Returns every level of the pyramid: level 0 is a copy of `points` and the
/// last level holds the single curve point.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyInput`] if `points` is empty.
pub fn de_casteljau_levels(points: &[Point2], t: f64) -> Result<Vec<Vec<Point2>>> {
    if points.is_empty() {
        return Err(GeometryError::EmptyInput("De Casteljau needs at least one point").into());
    }
    let mut levels = Vec::with_capacity(points.len());
    levels.push(points.to_vec());
    while let Some(last) = levels.last() {
        if last.len() <= 1 {
            break;
        }
        let next = last
            .windows(2)
            .map(|w| lerp_point(&w[0], &w[1], t))
            .collect();
        levels.push(next);
    }
    Ok(levels)
}
