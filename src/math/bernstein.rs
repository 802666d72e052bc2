/// Cubic Bernstein weights at a parameter `t`, in expanded power form:
///
/// ```text
/// a: -(t^3) + 3t^2 - 3t + 1
/// b:  3t^3  - 6t^2 + 3t
/// c: -3t^3  + 3t^2
/// d:    t^3
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BernsteinWeights {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl BernsteinWeights {
    /// Computes the cubic weights at `t`. No clamping is applied.
    #[must_use]
    pub fn cubic(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        Self {
            a: -t3 + 3.0 * t2 - 3.0 * t + 1.0,
            b: 3.0 * t3 - 6.0 * t2 + 3.0 * t,
            c: -3.0 * t3 + 3.0 * t2,
            d: t3,
        }
    }

    /// Returns the weights in control-point order `[a, b, c, d]`.
    #[must_use]
    pub fn to_array(self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Sum of the four weights. Equal to 1 for every `t` up to rounding.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.a + self.b + self.c + self.d
    }
}

/// Quadratic Bernstein weights `[(1-t)^2, 2t(1-t), t^2]`.
#[must_use]
pub fn quadratic_weights(t: f64) -> [f64; 3] {
    let mt = 1.0 - t;
    [mt * mt, 2.0 * mt * t, t * t]
}

/// Linear Bernstein weights `[1-t, t]`.
#[must_use]
pub fn linear_weights(t: f64) -> [f64; 2] {
    [1.0 - t, t]
}

/// Result of evaluating one axis of a cubic in Bernstein form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicLerp {
    /// Sum of the monomials.
    pub total: f64,
    /// Weighted contribution of each control coordinate, `[a, b, c, d]`.
    pub monomials: [f64; 4],
}

/// Evaluates one axis of a cubic Bezier from scalar control coordinates.
#[must_use]
pub fn cubic_lerp(a: f64, b: f64, c: f64, d: f64, t: f64) -> CubicLerp {
    let w = BernsteinWeights::cubic(t);
    let monomials = [a * w.a, b * w.b, c * w.c, d * w.d];
    CubicLerp {
        total: monomials[0] + monomials[1] + monomials[2] + monomials[3],
        monomials,
    }
}
