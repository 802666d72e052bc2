pub mod control_point;
pub mod curve;

pub use control_point::{Color, ControlPoint, PointLabel};
pub use curve::{
    de_casteljau_levels, CubicBezier, CubicConstruction, Curve, CurveDomain, CurveEvaluation,
    LinearBezier, QuadraticBezier, QuadraticConstruction,
};
