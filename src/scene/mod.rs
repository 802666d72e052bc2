mod config;
mod controller;

pub use config::{AnimationMode, RenderFlags, SceneConfig};
pub use controller::AnimationController;

use crate::geometry::{CubicBezier, ControlPoint, PointLabel};
use crate::math::{distance, Point2};

/// Control points and pointer interaction state.
#[derive(Debug, Clone)]
pub struct Scene {
    points: [ControlPoint; 4],
    pointer: Option<Point2>,
    dragging: Option<PointLabel>,
}

impl Scene {
    /// Distance from a control point within which a press grabs it.
    pub const GRAB_RADIUS: f64 = 20.0;

    /// Order in which overlapping points are hit-tested.
    const HIT_ORDER: [PointLabel; 4] = [PointLabel::B, PointLabel::C, PointLabel::D, PointLabel::A];

    /// Creates a scene from labelled control points.
    ///
    /// Points are stored in curve order regardless of the input order.
    #[must_use]
    pub fn new(points: [ControlPoint; 4]) -> Self {
        let mut ordered = points;
        ordered.sort_by_key(|p| p.label);
        Self {
            points: ordered,
            pointer: None,
            dragging: None,
        }
    }

    /// Creates a scene from the configured control points.
    #[must_use]
    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.labelled_points())
    }

    /// Returns the control points in curve order.
    #[must_use]
    pub fn control_points(&self) -> &[ControlPoint; 4] {
        &self.points
    }

    /// Returns the control point labelled `label`.
    #[must_use]
    pub fn control_point(&self, label: PointLabel) -> &ControlPoint {
        &self.points[label.index()]
    }

    /// Control point positions in curve order.
    #[must_use]
    pub fn positions(&self) -> [Point2; 4] {
        self.points.map(|p| p.position)
    }

    /// The cubic curve the control points currently define.
    #[must_use]
    pub fn curve(&self) -> CubicBezier {
        CubicBezier::from_points(self.positions())
    }

    /// Moves a control point.
    pub fn set_control_point(&mut self, label: PointLabel, position: Point2) {
        self.points[label.index()].position = position;
    }

    /// Last known pointer position.
    #[must_use]
    pub fn pointer(&self) -> Option<Point2> {
        self.pointer
    }

    /// The label of the point being dragged.
    #[must_use]
    pub fn dragging(&self) -> Option<PointLabel> {
        self.dragging
    }

    /// Returns the first control point within the grab radius of `position`.
    #[must_use]
    pub fn hit_test(&self, position: &Point2) -> Option<PointLabel> {
        Self::HIT_ORDER
            .into_iter()
            .find(|label| distance(&self.control_point(*label).position, position) <= Self::GRAB_RADIUS)
    }

    /// Starts dragging the point under `position`, if any.
    pub fn begin_drag(&mut self, position: Point2) -> Option<PointLabel> {
        self.pointer = Some(position);
        self.dragging = self.hit_test(&position);
        self.dragging
    }

    /// Records a pointer move; the dragged point, if any, follows it.
    pub fn drag_to(&mut self, position: Point2) {
        self.pointer = Some(position);
        if let Some(label) = self.dragging {
            self.set_control_point(label, position);
        }
    }

    /// Releases the dragged point.
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}
