//! Drawing primitives handed to a `Surface`
//!
//! Every primitive carries fully computed surface coordinates and its own
//! style. Surfaces never do geometry; they only translate primitives into
//! their native representation.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::types::Color;

/// Z-order band a primitive belongs to, lowest first.
///
/// The orchestrator always emits bands in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    PathShadow,
    RoutePath,
    Arrows,
    MarkerShadow,
    Marker,
    Label,
}

/// How an area is filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Top-to-bottom linear gradient
    VerticalGradient { top: Color, bottom: Color },
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(Color::None)
    }
}

/// Fill and stroke settings for a primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: Paint,
    pub stroke: Color,
    pub stroke_width: f64,
    /// Dash and gap lengths; `None` is a solid stroke
    pub dash: Option<[f64; 2]>,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Paint::default(),
            stroke: Color::None,
            stroke_width: 0.0,
            dash: None,
        }
    }
}

impl ShapeStyle {
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Paint::Solid(color),
            ..Self::default()
        }
    }

    pub fn stroked(color: Color, width: f64) -> Self {
        Self {
            stroke: color,
            stroke_width: width,
            ..Self::default()
        }
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = color;
        self.stroke_width = width;
        self
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = fill;
        self
    }

    pub fn dashed(mut self, pattern: [f64; 2]) -> Self {
        self.dash = Some(pattern);
        self
    }
}

/// Font used for text primitives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f64,
    pub bold: bool,
}

impl Font {
    pub const fn bold(size: f64) -> Self {
        Self { size, bold: true }
    }
}

/// Vertical placement of text relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// Anchor is on the alphabetic baseline
    Alphabetic,
    /// Anchor is at the vertical center of the glyphs
    Middle,
}

/// Common behavior for all primitives
#[enum_dispatch]
pub trait Drawable {
    /// Z-order band
    fn layer(&self) -> Layer;

    /// Short name used in diagnostics
    fn kind(&self) -> &'static str;

    /// Every coordinate of the primitive
    fn points(&self) -> Vec<DVec2>;

    /// True when no coordinate is NaN or infinite
    fn is_finite(&self) -> bool {
        self.points().iter().all(|p| p.is_finite())
    }
}

/// Axis-aligned rectangle given by its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub layer: Layer,
    pub origin: DVec2,
    pub size: DVec2,
    pub style: ShapeStyle,
}

/// Closed filled polygon
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub layer: Layer,
    pub vertices: Vec<DVec2>,
    pub style: ShapeStyle,
}

/// Open stroked path through a list of points
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineShape {
    pub layer: Layer,
    pub points: Vec<DVec2>,
    pub style: ShapeStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub layer: Layer,
    pub center: DVec2,
    pub radius: f64,
    pub style: ShapeStyle,
}

/// Single straight stroke
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentShape {
    pub layer: Layer,
    pub from: DVec2,
    pub to: DVec2,
    pub style: ShapeStyle,
}

/// Horizontally centered text
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub layer: Layer,
    pub anchor: DVec2,
    pub content: String,
    pub font: Font,
    pub color: Color,
    pub baseline: Baseline,
}

impl Drawable for RectShape {
    fn layer(&self) -> Layer {
        self.layer
    }
    fn kind(&self) -> &'static str {
        "rect"
    }
    fn points(&self) -> Vec<DVec2> {
        vec![self.origin, self.origin + self.size]
    }
}

impl Drawable for PolygonShape {
    fn layer(&self) -> Layer {
        self.layer
    }
    fn kind(&self) -> &'static str {
        "polygon"
    }
    fn points(&self) -> Vec<DVec2> {
        self.vertices.clone()
    }
}

impl Drawable for PolylineShape {
    fn layer(&self) -> Layer {
        self.layer
    }
    fn kind(&self) -> &'static str {
        "polyline"
    }
    fn points(&self) -> Vec<DVec2> {
        self.points.clone()
    }
}

impl Drawable for CircleShape {
    fn layer(&self) -> Layer {
        self.layer
    }
    fn kind(&self) -> &'static str {
        "circle"
    }
    fn points(&self) -> Vec<DVec2> {
        vec![self.center]
    }
    fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}

impl Drawable for SegmentShape {
    fn layer(&self) -> Layer {
        self.layer
    }
    fn kind(&self) -> &'static str {
        "segment"
    }
    fn points(&self) -> Vec<DVec2> {
        vec![self.from, self.to]
    }
}

impl Drawable for TextShape {
    fn layer(&self) -> Layer {
        self.layer
    }
    fn kind(&self) -> &'static str {
        "text"
    }
    fn points(&self) -> Vec<DVec2> {
        vec![self.anchor]
    }
}

/// Anything a surface can draw
#[enum_dispatch(Drawable)]
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(RectShape),
    Polygon(PolygonShape),
    Polyline(PolylineShape),
    Circle(CircleShape),
    Segment(SegmentShape),
    Text(TextShape),
}
