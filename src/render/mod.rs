mod plot;
mod renderer;

pub use plot::{DecompositionPlot, PlotSeries};
pub use renderer::Renderer;

use crate::geometry::Color;
use crate::math::Point2;

/// How a point is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PointStyle {
    pub radius: f64,
    pub color: Color,
    /// Text drawn next to the point.
    pub text: Option<String>,
}

impl PointStyle {
    /// A filled dot without text.
    #[must_use]
    pub fn dot(radius: f64, color: Color) -> Self {
        Self {
            radius,
            color,
            text: None,
        }
    }

    /// Adds text next to the point.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// How a line or polyline is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
}

impl LineStyle {
    #[must_use]
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

/// A 2D drawing target implemented by the host (canvas, window, SVG writer).
///
/// Coordinates are in scene units with the origin wherever the host placed
/// it; the renderer assumes the origin is the center of the surface.
pub trait Surface {
    /// Width and height of the drawable area.
    fn size(&self) -> (f64, f64);

    /// Erases everything drawn so far.
    fn clear(&mut self);

    fn draw_point(&mut self, position: Point2, style: &PointStyle);

    fn draw_line(&mut self, from: Point2, to: Point2, style: &LineStyle);

    fn draw_polyline(&mut self, points: &[Point2], style: &LineStyle);
}

/// A drawing primitive captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Point {
        position: Point2,
        style: PointStyle,
    },
    Line {
        from: Point2,
        to: Point2,
        style: LineStyle,
    },
    Polyline {
        points: Vec<Point2>,
        style: LineStyle,
    },
}

/// A [`Surface`] that records primitives into a display list.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    primitives: Vec<Primitive>,
}

impl RecordingSurface {
    /// Creates an empty surface of the given size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    /// Primitives drawn since the last clear, in drawing order.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Points drawn in `color`.
    pub fn points_with_color(&self, color: Color) -> impl Iterator<Item = &Point2> + '_ {
        self.primitives.iter().filter_map(move |p| match p {
            Primitive::Point { position, style } if style.color == color => Some(position),
            _ => None,
        })
    }

    /// Lines drawn in `color`.
    pub fn lines_with_color(&self, color: Color) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        self.primitives.iter().filter_map(move |p| match p {
            Primitive::Line { from, to, style } if style.color == color => Some((from, to)),
            _ => None,
        })
    }

    /// All polylines drawn.
    pub fn polylines(&self) -> impl Iterator<Item = &[Point2]> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.primitives.clear();
    }

    fn draw_point(&mut self, position: Point2, style: &PointStyle) {
        self.primitives.push(Primitive::Point {
            position,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point2, to: Point2, style: &LineStyle) {
        self.primitives.push(Primitive::Line {
            from,
            to,
            style: *style,
        });
    }

    fn draw_polyline(&mut self, points: &[Point2], style: &LineStyle) {
        self.primitives.push(Primitive::Polyline {
            points: points.to_vec(),
            style: *style,
        });
    }
}
