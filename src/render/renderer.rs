use tracing::error;

use crate::error::{RenderError, Result};
use crate::geometry::{Color, ControlPoint, PointLabel};
use crate::math::point_ops::add;
use crate::math::{centroid, Point2};
use crate::scene::{RenderFlags, Scene};
use crate::tessellation::{TessellateCurve, TessellationParams};

use super::{LineStyle, PointStyle, Surface};

const CONTROL_POINT_RADIUS: f64 = 5.0;
const MARKER_RADIUS: f64 = 3.0;

/// Draws frames of a [`Scene`] onto a [`Surface`].
#[derive(Debug)]
pub struct Renderer<S: Surface> {
    surface: S,
    tessellation: TessellationParams,
}

impl<S: Surface> Renderer<S> {
    /// Attaches a renderer to the host's surface.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SurfaceUnavailable`] if the host could not
    /// provide one. There is nothing to draw on for the rest of the session.
    pub fn attach(surface: Option<S>) -> Result<Self> {
        let Some(surface) = surface else {
            error!("drawing surface unavailable, nothing can be rendered");
            return Err(RenderError::SurfaceUnavailable.into());
        };
        Ok(Self {
            surface,
            tessellation: TessellationParams::default(),
        })
    }

    /// Replaces the curve path tessellation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` are invalid.
    pub fn with_tessellation(mut self, params: TessellationParams) -> Result<Self> {
        params.validate()?;
        self.tessellation = params;
        Ok(self)
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Clears the surface and draws the scene at parameter `t`.
    ///
    /// Layers are drawn back to front: axis, pointer indicator, control
    /// points, De Casteljau construction, Bernstein contribution chain,
    /// control polygon, curve path. Optional layers follow `flags`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve path cannot be tessellated.
    pub fn draw_frame(&mut self, scene: &Scene, flags: &RenderFlags, t: f64) -> Result<()> {
        self.surface.clear();

        if flags.show_axis {
            self.draw_axis();
        }

        if flags.show_pointer_indicator {
            if let Some(pointer) = scene.pointer() {
                let style = PointStyle::dot(MARKER_RADIUS, Color::RED).with_text(coordinates(&pointer));
                self.surface.draw_point(pointer, &style);
            }
        }

        for cp in scene.control_points() {
            self.draw_control_point(cp, flags);
        }

        self.draw_construction(scene, flags, t);

        if flags.show_bernstein {
            self.draw_contributions(scene, t)?;
        }

        if flags.show_primary_lines {
            let style = LineStyle::default();
            let [a, b, c, d] = scene.positions();
            for (from, to) in [(a, b), (b, c), (c, d)] {
                self.surface.draw_line(from, to, &style);
            }
        }

        if flags.show_curve_path {
            let curve = scene.curve();
            let path = TessellateCurve::new(&curve, self.tessellation).execute()?;
            self.surface.draw_polyline(&path.points, &LineStyle::default());
        }

        Ok(())
    }

    fn draw_axis(&mut self) {
        let (w, h) = self.surface.size();
        let style = LineStyle::default();
        self.surface
            .draw_line(Point2::new(-w / 2.0, 0.0), Point2::new(w / 2.0, 0.0), &style);
        self.surface
            .draw_line(Point2::new(0.0, -h / 2.0), Point2::new(0.0, h / 2.0), &style);
    }

    fn draw_control_point(&mut self, cp: &ControlPoint, flags: &RenderFlags) {
        let text = if flags.show_coordinates {
            coordinates(&cp.position)
        } else {
            cp.label.to_string()
        };
        let style = PointStyle::dot(CONTROL_POINT_RADIUS, cp.color).with_text(text);
        self.surface.draw_point(cp.position, &style);
    }

    fn draw_construction(&mut self, scene: &Scene, flags: &RenderFlags, t: f64) {
        let construction = scene.curve().construct(t);

        if flags.show_intermediate_points {
            let levels = construction
                .first_level()
                .into_iter()
                .map(|p| (p, Color::BLACK))
                .chain(construction.second_level().into_iter().map(|p| (p, Color::GREEN)));
            for (p, color) in levels {
                let mut style = PointStyle::dot(CONTROL_POINT_RADIUS, color);
                if flags.show_coordinates {
                    style = style.with_text(coordinates(&p));
                }
                self.surface.draw_point(p, &style);
            }
        }

        self.surface.draw_point(
            construction.point,
            &PointStyle::dot(CONTROL_POINT_RADIUS, Color::CYAN),
        );

        if flags.show_intermediate_lines {
            let style = LineStyle::default();
            for (from, to) in construction.scaffold_lines() {
                self.surface.draw_line(from, to, &style);
            }
        }
    }

    /// Lays the recentered contribution vectors end to end from the centroid.
    /// The chain ends on the curve point.
    fn draw_contributions(&mut self, scene: &Scene, t: f64) -> Result<()> {
        let center = centroid(&scene.positions())?;
        self.surface
            .draw_point(center, &PointStyle::dot(MARKER_RADIUS, Color::LIME));

        let eval = scene.curve().recentered().evaluate_bernstein(t);
        let mut from = center;
        for label in PointLabel::ALL {
            let cp = scene.control_point(label);
            let to = add(from, eval.contribution(label));
            self.surface.draw_line(from, to, &LineStyle::new(cp.color, 1.0));
            from = to;
        }
        Ok(())
    }
}

fn coordinates(p: &Point2) -> String {
    format!("({:.2},{:.2})", p.x, p.y)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CasteljauError;
    use crate::render::{Primitive, RecordingSurface};
    use approx::assert_abs_diff_eq;

    fn renderer() -> Renderer<RecordingSurface> {
        Renderer::attach(Some(RecordingSurface::new(600.0, 400.0))).unwrap()
    }

    fn all_flags() -> RenderFlags {
        RenderFlags {
            show_intermediate_points: true,
            show_intermediate_lines: true,
            show_primary_lines: true,
            show_axis: true,
            show_coordinates: false,
            show_pointer_indicator: true,
            show_curve_path: true,
            show_bernstein: true,
        }
    }

    fn no_flags() -> RenderFlags {
        RenderFlags {
            show_curve_path: false,
            ..RenderFlags::default()
        }
    }

    #[test]
    fn missing_surface_is_fatal() {
        let err = Renderer::<RecordingSurface>::attach(None).unwrap_err();
        assert!(matches!(
            err,
            CasteljauError::Render(RenderError::SurfaceUnavailable)
        ));
    }

    #[test]
    fn minimal_frame_has_control_points_and_curve_point() {
        let mut r = renderer();
        let scene = Scene::default();
        r.draw_frame(&scene, &no_flags(), 0.5).unwrap();

        let prims = r.surface().primitives();
        assert_eq!(prims.len(), 5);
        let cyan: Vec<&Point2> = r.surface().points_with_color(Color::CYAN).collect();
        assert_eq!(cyan.len(), 1);
        assert_abs_diff_eq!(cyan[0].x, -25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cyan[0].y, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn control_points_are_labelled() {
        let mut r = renderer();
        r.draw_frame(&Scene::default(), &no_flags(), 0.0).unwrap();
        let texts: Vec<&str> = r
            .surface()
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Point { style, .. } => style.text.as_deref(),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn coordinates_replace_labels_when_enabled() {
        let mut r = renderer();
        let flags = RenderFlags {
            show_coordinates: true,
            ..no_flags()
        };
        r.draw_frame(&Scene::default(), &flags, 0.0).unwrap();
        match &r.surface().primitives()[0] {
            Primitive::Point { style, .. } => {
                assert_eq!(style.text.as_deref(), Some("(0.00,-100.00)"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn each_frame_starts_from_a_clear_surface() {
        let mut r = renderer();
        let scene = Scene::default();
        r.draw_frame(&scene, &all_flags(), 0.2).unwrap();
        let first = r.surface().primitives().len();
        r.draw_frame(&scene, &all_flags(), 0.4).unwrap();
        assert_eq!(r.surface().primitives().len(), first);
    }

    #[test]
    fn intermediate_layers_follow_flags() {
        let mut r = renderer();
        let flags = RenderFlags {
            show_intermediate_points: true,
            show_intermediate_lines: true,
            ..no_flags()
        };
        r.draw_frame(&Scene::default(), &flags, 0.5).unwrap();
        // Two second-level points plus control point B.
        assert_eq!(r.surface().points_with_color(Color::GREEN).count(), 3);
        assert_eq!(r.surface().points_with_color(Color::BLACK).count(), 3);
        assert_eq!(r.surface().lines_with_color(Color::BLACK).count(), 3);
    }

    #[test]
    fn curve_path_runs_from_a_to_d() {
        let mut r = renderer();
        let scene = Scene::default();
        r.draw_frame(&scene, &RenderFlags::default(), 0.5).unwrap();
        let path = r.surface().polylines().next().unwrap();
        assert_eq!(path.first(), Some(&scene.control_point(PointLabel::A).position));
        assert_eq!(path.last(), Some(&scene.control_point(PointLabel::D).position));
    }

    #[test]
    fn contribution_chain_ends_on_curve_point() {
        let mut r = renderer();
        let mut scene = Scene::default();
        scene.set_control_point(PointLabel::B, Point2::new(-140.0, 35.0));
        let flags = RenderFlags {
            show_bernstein: true,
            ..no_flags()
        };
        let t = 0.37;
        r.draw_frame(&scene, &flags, t).unwrap();

        let center = centroid(&scene.positions()).unwrap();
        let lines: Vec<(Point2, Point2)> = r
            .surface()
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].0, center);
        for pair in lines.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }

        let expected = scene.curve().evaluate_bernstein(t).point;
        let end = lines[3].1;
        assert_abs_diff_eq!(end.x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(end.y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn pointer_indicator_needs_a_pointer() {
        let mut r = renderer();
        let flags = RenderFlags {
            show_pointer_indicator: true,
            ..no_flags()
        };
        let mut scene = Scene::default();
        r.draw_frame(&scene, &flags, 0.5).unwrap();
        assert_eq!(r.surface().points_with_color(Color::RED).count(), 1); // control point A

        scene.drag_to(Point2::new(10.0, 10.0));
        r.draw_frame(&scene, &flags, 0.5).unwrap();
        assert_eq!(r.surface().points_with_color(Color::RED).count(), 2);
    }

    #[test]
    fn axis_spans_the_surface() {
        let mut r = renderer();
        let flags = RenderFlags {
            show_axis: true,
            ..no_flags()
        };
        r.draw_frame(&Scene::default(), &flags, 0.5).unwrap();
        let axis: Vec<(&Point2, &Point2)> = r.surface().lines_with_color(Color::BLACK).collect();
        assert_eq!(axis.len(), 2);
        assert_eq!(*axis[0].0, Point2::new(-300.0, 0.0));
        assert_eq!(*axis[1].1, Point2::new(0.0, 200.0));
    }

    #[test]
    fn invalid_tessellation_is_rejected() {
        let params = TessellationParams {
            tolerance: 0.0,
            ..TessellationParams::default()
        };
        assert!(renderer().with_tessellation(params).is_err());
    }
}
