//! Path construction and stroking for glyph outlines.

use crate::color::Rgb;
use crate::data::{ControlPointSet, Point};
use crate::error::{MorphError, Result};

/// One drawing command in a glyph path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Lift the pen and place it at a point.
    MoveTo(Point),
    /// Cubic Bézier from the current point.
    CubicTo {
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
    },
}

/// Immutable path produced from a control-point set.
///
/// Always starts with a single [`PathCommand::MoveTo`] followed by zero or
/// more [`PathCommand::CubicTo`] segments in the order of the source points.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphPath {
    commands: Vec<PathCommand>,
}

impl GlyphPath {
    /// Commands in draw order.
    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of cubic segments.
    pub fn segment_count(&self) -> usize {
        self.commands.len().saturating_sub(1)
    }

    /// Feed every command to a sink, in order.
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => sink.move_to(p.x, p.y),
                PathCommand::CubicTo { ctrl1, ctrl2, end } => {
                    sink.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, end.x, end.y)
                }
            }
        }
    }
}

#[cfg(feature = "kurbo")]
impl From<&GlyphPath> for kurbo::BezPath {
    fn from(path: &GlyphPath) -> Self {
        let mut bez = kurbo::BezPath::new();
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo(p) => bez.move_to((p.x, p.y)),
                PathCommand::CubicTo { ctrl1, ctrl2, end } => {
                    bez.curve_to((ctrl1.x, ctrl1.y), (ctrl2.x, ctrl2.y), (end.x, end.y))
                }
            }
        }
        bez
    }
}

/// Build a drawable path from control points.
///
/// The first point becomes the move-to anchor; every following triple is a
/// cubic segment (control 1, control 2, end). All coordinates are multiplied
/// by `scale`. Fails with [`MorphError::InvalidPointCount`] unless the set has
/// `1 + 3k` points.
///
/// ## Example
///
/// ```rust
/// use glyph_morph::{render::build_path, render::PathCommand, ControlPointSet, Point};
///
/// let points = ControlPointSet::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// let path = build_path(&points, 10.0).unwrap();
///
/// assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(0.0, 0.0)));
/// assert_eq!(path.segment_count(), 1);
/// ```
pub fn build_path(points: &ControlPointSet, scale: f64) -> Result<GlyphPath> {
    let Some(segments) = points.segment_count() else {
        return Err(MorphError::InvalidPointCount { len: points.len() });
    };

    let pts = points.points();
    let mut commands = Vec::with_capacity(segments + 1);
    commands.push(PathCommand::MoveTo(pts[0].scaled(scale)));

    for triple in pts[1..].chunks_exact(3) {
        commands.push(PathCommand::CubicTo {
            ctrl1: triple[0].scaled(scale),
            ctrl2: triple[1].scaled(scale),
            end: triple[2].scaled(scale),
        });
    }

    Ok(GlyphPath { commands })
}

/// Stroke settings for drawing a glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Rgb,
    /// Stroke width in surface units
    pub width: f64,
}

impl StrokeStyle {
    /// Get the color as a CSS-compatible string "rgb(r,g,b)"
    pub fn color_string(&self) -> String {
        self.color.css()
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            width: 2.0,
        }
    }
}

/// A drawing surface that accepts path commands.
///
/// Hosts implement this for their canvas. Commands for one glyph arrive as a
/// single `move_to`, a run of `cubic_to` calls and a final `stroke`.
pub trait PathSink {
    /// Begin a new subpath at (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    /// Cubic segment from the current point with controls (c1x, c1y),
    /// (c2x, c2y) ending at (x, y).
    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);

    /// Stroke the accumulated path and clear it.
    fn stroke(&mut self, style: &StrokeStyle);
}

/// Recording sink that keeps every call, for hosts that batch drawing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSink {
    /// Commands of the path being accumulated
    pub pending: Vec<PathCommand>,
    /// Completed strokes with their style
    pub strokes: Vec<(Vec<PathCommand>, StrokeStyle)>,
}

impl PathSink for RecordingSink {
    fn move_to(&mut self, x: f64, y: f64) {
        self.pending.push(PathCommand::MoveTo(Point::new(x, y)));
    }

    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.pending.push(PathCommand::CubicTo {
            ctrl1: Point::new(c1x, c1y),
            ctrl2: Point::new(c2x, c2y),
            end: Point::new(x, y),
        });
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        let commands = std::mem::take(&mut self.pending);
        self.strokes.push((commands, *style));
    }
}

/// Build a path and stroke it onto a sink.
pub fn stroke_points<S: PathSink + ?Sized>(
    sink: &mut S,
    points: &ControlPointSet,
    scale: f64,
    style: &StrokeStyle,
) -> Result<()> {
    let path = build_path(points, scale)?;
    path.replay(sink);
    sink.stroke(style);
    Ok(())
}

/// Web-specific rendering implementation.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    /// [`PathSink`] backed by a 2D canvas context.
    pub struct WebCanvasSink {
        ctx: CanvasRenderingContext2d,
        started: bool,
    }

    impl WebCanvasSink {
        /// Wrap the 2D context of a canvas element.
        pub fn new(canvas: &HtmlCanvasElement) -> std::result::Result<Self, String> {
            let ctx = canvas
                .get_context("2d")
                .map_err(|_| "Failed to get 2d context")?
                .ok_or("No 2d context available")?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;
            Ok(Self { ctx, started: false })
        }

        fn ensure_path(&mut self) {
            if !self.started {
                self.ctx.begin_path();
                self.started = true;
            }
        }
    }

    impl PathSink for WebCanvasSink {
        fn move_to(&mut self, x: f64, y: f64) {
            self.ensure_path();
            self.ctx.move_to(x, y);
        }

        fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
            self.ensure_path();
            self.ctx.bezier_curve_to(c1x, c1y, c2x, c2y, x, y);
        }

        fn stroke(&mut self, style: &StrokeStyle) {
            self.ctx.set_stroke_style_str(&style.color_string());
            self.ctx.set_line_width(style.width);
            self.ctx.stroke();
            self.started = false;
        }
    }

    /// Clear a canvas and stroke the view's current glyph onto it.
    ///
    /// ## Example
    ///
    /// ```rust,ignore
    /// use glyph_morph::render::web::render_to_canvas;
    ///
    /// let canvas: web_sys::HtmlCanvasElement = // ... get canvas element
    /// view.advance();
    /// render_to_canvas(&view, &canvas)?;
    /// ```
    pub fn render_to_canvas(
        view: &crate::GlyphView,
        canvas: &HtmlCanvasElement,
    ) -> std::result::Result<(), String> {
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        let mut sink = WebCanvasSink::new(canvas)?;
        sink.ctx.clear_rect(0.0, 0.0, width, height);
        view.render(&mut sink, width, height)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_path_square() {
        let points = ControlPointSet::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let path = build_path(&points, 10.0).unwrap();

        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::CubicTo {
                    ctrl1: Point::new(0.0, 10.0),
                    ctrl2: Point::new(10.0, 10.0),
                    end: Point::new(10.0, 0.0),
                },
            ]
        );
    }

    #[test]
    fn test_build_path_keeps_order() {
        let pairs: Vec<(f64, f64)> = (0..7).map(|i| (i as f64, 0.0)).collect();
        let path = build_path(&ControlPointSet::from_pairs(&pairs), 1.0).unwrap();

        assert_eq!(path.segment_count(), 2);
        match path.commands()[2] {
            PathCommand::CubicTo { ctrl1, ctrl2, end } => {
                assert_eq!((ctrl1.x, ctrl2.x, end.x), (4.0, 5.0, 6.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_build_path_single_anchor() {
        let path = build_path(&ControlPointSet::from_pairs(&[(0.5, 0.5)]), 2.0).unwrap();
        assert_eq!(path.commands(), &[PathCommand::MoveTo(Point::new(1.0, 1.0))]);
    }

    #[test]
    fn test_build_path_rejects_bad_lengths() {
        assert_eq!(
            build_path(&ControlPointSet::default(), 1.0),
            Err(MorphError::InvalidPointCount { len: 0 })
        );
        let five = ControlPointSet::from_pairs(&[(0.0, 0.0); 5]);
        assert_eq!(build_path(&five, 1.0), Err(MorphError::InvalidPointCount { len: 5 }));
    }

    #[test]
    fn test_stroke_points_records_style() {
        let mut sink = RecordingSink::default();
        let style = StrokeStyle {
            color: Rgb(255, 0, 0),
            width: 3.0,
        };
        let points = ControlPointSet::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);

        stroke_points(&mut sink, &points, 1.0, &style).unwrap();

        assert!(sink.pending.is_empty());
        assert_eq!(sink.strokes.len(), 1);
        assert_eq!(sink.strokes[0].0.len(), 2);
        assert_eq!(sink.strokes[0].1, style);
        assert_eq!(style.color_string(), "rgb(255,0,0)");
    }
}
