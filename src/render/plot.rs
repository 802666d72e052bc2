use crate::error::{RenderError, Result};
use crate::geometry::{Color, CubicBezier, CurveEvaluation, PointLabel};
use crate::math::point_ops::div;
use crate::math::{Point2, Vector2, ZeroDivision};
use crate::sampling::{SampleCache, SampleRange};
use crate::scene::Scene;

use super::{LineStyle, Surface};

const CURSOR_WIDTH: f64 = 10.0;

type Sampler = fn(&[Point2; 4], f64) -> CurveEvaluation;

fn sample_recentered(points: &[Point2; 4], t: f64) -> CurveEvaluation {
    CubicBezier::from_points(*points).recentered().evaluate_bernstein(t)
}

/// One control point's share of the curve over the sampled range.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: PointLabel,
    pub color: Color,
    /// Plot points in ascending `t`.
    pub points: Vec<Point2>,
}

/// Plots how much each control point contributes to the curve as `t`
/// sweeps the sample range.
///
/// Plot coordinates put `t = 0` at `x = -width / 2` and `t = 1` at
/// `x = width / 2`. A share of 1 sits at `y = -height`, so a host that
/// translates its origin to the bottom center of the plot area draws the
/// series growing upwards.
///
/// Evaluations are memoized per control point configuration; moving a point
/// or changing the range re-samples everything.
#[derive(Debug)]
pub struct DecompositionPlot {
    cache: SampleCache<[Point2; 4], CurveEvaluation, Sampler>,
}

impl DecompositionPlot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: SampleCache::new(sample_recentered as Sampler),
        }
    }

    /// Samples the scene's curve over `range`, reusing cached samples when
    /// neither the control points nor the range changed.
    ///
    /// Returns `true` when the cache was rebuilt.
    ///
    /// # Errors
    ///
    /// Returns an error if `range` is malformed.
    pub fn update(&mut self, scene: &Scene, range: SampleRange) -> Result<bool> {
        self.cache.configure(scene.positions(), range)
    }

    /// The recentered evaluation nearest to `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the plot has never been updated or `t` is not
    /// finite.
    pub fn evaluation_at(&mut self, t: f64) -> Result<CurveEvaluation> {
        self.cache.retrieve(t).copied()
    }

    /// Normalized share of each control point in `eval`, in curve order.
    ///
    /// A share is the mean over both axes of the control point's absolute
    /// contribution divided by the sum of absolute contributions. An axis
    /// whose contributions are all zero adds nothing.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic errors, which the substitution policy rules out.
    pub fn contribution_shares(eval: &CurveEvaluation) -> Result<[f64; 4]> {
        let total = eval
            .contributions
            .iter()
            .fold(Vector2::zeros(), |acc, c| acc + c.abs());
        let mut shares = [0.0; 4];
        for (share, c) in shares.iter_mut().zip(&eval.contributions) {
            let ratio = div(c.abs(), total, ZeroDivision::Substitute(0.0))?;
            *share = (ratio.x + ratio.y) / 2.0;
        }
        Ok(shares)
    }

    /// One series per control point over the cached samples.
    ///
    /// # Errors
    ///
    /// Returns an error if a share cannot be computed.
    pub fn series(&self, scene: &Scene, width: f64, height: f64) -> Result<Vec<PlotSeries>> {
        let mut series: Vec<PlotSeries> = scene
            .control_points()
            .iter()
            .map(|cp| PlotSeries {
                label: cp.label,
                color: cp.color,
                points: Vec::with_capacity(self.cache.len()),
            })
            .collect();

        for (t, eval) in self.cache.samples() {
            let shares = Self::contribution_shares(eval)?;
            let x = t * width - width / 2.0;
            for (s, share) in series.iter_mut().zip(shares) {
                s.points.push(Point2::new(x, -share * height));
            }
        }
        Ok(series)
    }

    /// The vertical line marking `t`, from top to bottom of the plot.
    #[must_use]
    pub fn cursor(t: f64, width: f64, height: f64) -> (Point2, Point2) {
        let x = t * width - width / 2.0;
        (Point2::new(x, height / 2.0), Point2::new(x, -height))
    }

    /// Updates the samples and draws the cursor and every series.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidParameters`] for a surface without
    /// area, otherwise as [`update`](Self::update).
    pub fn draw<S: Surface>(
        &mut self,
        surface: &mut S,
        scene: &Scene,
        range: SampleRange,
        t: f64,
    ) -> Result<()> {
        let (width, height) = surface.size();
        if !(width > 0.0 && height > 0.0) {
            return Err(RenderError::InvalidParameters(format!(
                "plot surface must have positive size, got {width}x{height}"
            ))
            .into());
        }
        self.update(scene, range)?;

        surface.clear();
        let (top, bottom) = Self::cursor(t, width, height);
        surface.draw_line(top, bottom, &LineStyle::new(Color::WHITE, CURSOR_WIDTH));
        for s in self.series(scene, width, height)? {
            surface.draw_polyline(&s.points, &LineStyle::new(s.color, 1.0));
        }
        Ok(())
    }
}

impl Default for DecompositionPlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{CasteljauError, SamplingError};
    use crate::render::RecordingSurface;
    use approx::assert_relative_eq;

    fn unit_range() -> SampleRange {
        SampleRange::new(0.0, 1.0, 0.25).unwrap()
    }

    #[test]
    fn shares_sum_to_one() {
        let scene = Scene::default();
        for t in [0.1, 0.3, 0.5, 0.8] {
            let eval = sample_recentered(&scene.positions(), t);
            let shares = DecompositionPlot::contribution_shares(&eval).unwrap();
            assert_relative_eq!(shares.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
            assert!(shares.iter().all(|s| (0.0..=1.0).contains(s)));
        }
    }

    #[test]
    fn zero_axis_contributes_nothing() {
        // All points on the x axis: every y contribution is zero.
        let eval = CubicBezier::new(
            Point2::new(-3.0, 0.0),
            Point2::new(-1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(3.0, 0.0),
        )
        .evaluate_bernstein(0.5);
        let shares = DecompositionPlot::contribution_shares(&eval).unwrap();
        assert!(shares.iter().all(|s| s.is_finite()));
        assert_relative_eq!(shares.iter().sum::<f64>(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn endpoint_belongs_to_a() {
        let eval = sample_recentered(&Scene::default().positions(), 0.0);
        let shares = DecompositionPlot::contribution_shares(&eval).unwrap();
        // A recentered diamond puts A on the y axis only.
        assert_relative_eq!(shares[0], 0.5);
        assert_relative_eq!(shares[1] + shares[2] + shares[3], 0.0);
    }

    #[test]
    fn series_span_plot_width() {
        let scene = Scene::default();
        let mut plot = DecompositionPlot::new();
        assert!(plot.update(&scene, unit_range()).unwrap());
        let series = plot.series(&scene, 200.0, 100.0).unwrap();

        assert_eq!(series.len(), 4);
        for (s, label) in series.iter().zip(PointLabel::ALL) {
            assert_eq!(s.label, label);
            assert_eq!(s.color, scene.control_point(label).color);
            assert_eq!(s.points.len(), 5);
            assert_relative_eq!(s.points[0].x, -100.0);
            assert_relative_eq!(s.points[4].x, 100.0);
            assert!(s.points.iter().all(|p| (-100.0..=0.0).contains(&p.y)));
        }
    }

    #[test]
    fn update_reuses_samples_until_a_point_moves() {
        let mut scene = Scene::default();
        let mut plot = DecompositionPlot::new();
        assert!(plot.update(&scene, unit_range()).unwrap());
        assert!(!plot.update(&scene, unit_range()).unwrap());

        scene.set_control_point(PointLabel::C, Point2::new(10.0, 120.0));
        assert!(plot.update(&scene, unit_range()).unwrap());
        let eval = plot.evaluation_at(0.5).unwrap();
        assert_eq!(eval, sample_recentered(&scene.positions(), 0.5));
    }

    #[test]
    fn evaluation_requires_update() {
        let err = DecompositionPlot::new().evaluation_at(0.5).unwrap_err();
        assert!(matches!(
            err,
            CasteljauError::Sampling(SamplingError::NotConfigured)
        ));
    }

    #[test]
    fn cursor_tracks_t() {
        let (top, bottom) = DecompositionPlot::cursor(0.75, 400.0, 100.0);
        assert_eq!(top, Point2::new(100.0, 50.0));
        assert_eq!(bottom, Point2::new(100.0, -100.0));
    }

    #[test]
    fn draw_emits_cursor_then_series() {
        let mut surface = RecordingSurface::new(200.0, 100.0);
        let mut plot = DecompositionPlot::new();
        plot.draw(&mut surface, &Scene::default(), unit_range(), 0.5)
            .unwrap();
        assert_eq!(surface.lines_with_color(Color::WHITE).count(), 1);
        assert_eq!(surface.polylines().count(), 4);
    }

    #[test]
    fn draw_rejects_empty_surface() {
        let mut surface = RecordingSurface::new(0.0, 100.0);
        let err = DecompositionPlot::new()
            .draw(&mut surface, &Scene::default(), unit_range(), 0.5)
            .unwrap_err();
        assert!(matches!(
            err,
            CasteljauError::Render(RenderError::InvalidParameters(_))
        ));
    }
}
