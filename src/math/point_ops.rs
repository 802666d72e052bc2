use crate::error::{Axis, GeometryError, Result};

use super::{Point2, Vector2};

/// What a division does with a zero denominator component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZeroDivision {
    /// Fail with [`GeometryError::DivisionByZero`].
    Error,
    /// Use the given value as the affected component.
    Substitute(f64),
    /// Return the numerator component unchanged.
    PassThrough,
}

/// A componentwise operation between two operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointOp {
    Add,
    Sub,
    Mul,
    Div(ZeroDivision),
}

/// Operand of a point operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operand(Vector2);

impl Operand {
    /// Returns the operand as a vector.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.0
    }
}

impl From<Point2> for Operand {
    fn from(p: Point2) -> Self {
        Self(p.coords)
    }
}

impl From<&Point2> for Operand {
    fn from(p: &Point2) -> Self {
        Self(p.coords)
    }
}

impl From<Vector2> for Operand {
    fn from(v: Vector2) -> Self {
        Self(v)
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Self(Vector2::new(s, s))
    }
}

/// Applies `op` to `a` and `b` componentwise.
///
/// # Errors
///
/// Returns [`GeometryError::DivisionByZero`] only for
/// `PointOp::Div(ZeroDivision::Error)` with a zero denominator component.
/// The x axis is reported first when both are zero.
pub fn operate(a: impl Into<Operand>, b: impl Into<Operand>, op: PointOp) -> Result<Point2> {
    let a = a.into().vector();
    let b = b.into().vector();
    let (x, y) = match op {
        PointOp::Add => (a.x + b.x, a.y + b.y),
        PointOp::Sub => (a.x - b.x, a.y - b.y),
        PointOp::Mul => (a.x * b.x, a.y * b.y),
        PointOp::Div(policy) => (
            divide(a.x, b.x, policy, Axis::X)?,
            divide(a.y, b.y, policy, Axis::Y)?,
        ),
    };
    Ok(Point2::new(x, y))
}

/// Componentwise sum.
#[must_use]
pub fn add(a: impl Into<Operand>, b: impl Into<Operand>) -> Point2 {
    Point2::from(a.into().vector() + b.into().vector())
}

/// Componentwise difference.
#[must_use]
pub fn sub(a: impl Into<Operand>, b: impl Into<Operand>) -> Point2 {
    Point2::from(a.into().vector() - b.into().vector())
}

/// Componentwise product.
#[must_use]
pub fn mul(a: impl Into<Operand>, b: impl Into<Operand>) -> Point2 {
    Point2::from(a.into().vector().component_mul(&b.into().vector()))
}

/// Componentwise quotient under an explicit zero-division policy.
///
/// # Errors
///
/// See [`operate`].
pub fn div(a: impl Into<Operand>, b: impl Into<Operand>, policy: ZeroDivision) -> Result<Point2> {
    operate(a, b, PointOp::Div(policy))
}

fn divide(numerator: f64, denominator: f64, policy: ZeroDivision, axis: Axis) -> Result<f64> {
    if denominator != 0.0 {
        return Ok(numerator / denominator);
    }
    match policy {
        ZeroDivision::Error => Err(GeometryError::DivisionByZero { axis }.into()),
        ZeroDivision::Substitute(value) => Ok(value),
        ZeroDivision::PassThrough => Ok(numerator),
    }
}
