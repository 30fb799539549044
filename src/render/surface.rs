//! Drawing surfaces
//!
//! A `Surface` is exclusively borrowed by one render call. Rendering resets
//! it first, so re-rendering replaces content instead of composing with it.

use super::primitives::{Drawable, Font, Primitive};
use super::route_info::RouteInfo;
use crate::errors::RenderError;
use crate::types::Size;

/// How a placeholder is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Normal empty state, not a malfunction
    Info,
    /// Something went wrong while rendering
    Error,
}

impl Severity {
    /// CSS class used by HTML and SVG output
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Info => "alert-info",
            Severity::Error => "alert-danger",
        }
    }
}

/// Diagnostic block that replaces a surface's content after a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub severity: Severity,
    pub message: String,
}

impl Placeholder {
    pub const NO_DATA: &'static str = "No location data available for route visualization.";
    pub const RENDER_FAILED: &'static str = "Error displaying route map. Please try again.";

    pub fn for_severity(severity: Severity) -> Self {
        let message = match severity {
            Severity::Info => Self::NO_DATA,
            Severity::Error => Self::RENDER_FAILED,
        };
        Self {
            severity,
            message: message.to_string(),
        }
    }
}

/// Text measurement, when the surface has font metrics
pub trait TextMeasure {
    /// Width of `text` in pixels, or `None` if it cannot be measured
    fn measure_text(&self, text: &str, font: &Font) -> Option<f64>;
}

/// Target of a route render
pub trait Surface: TextMeasure {
    fn size(&self) -> Size;

    /// Drop all content
    fn reset(&mut self);

    /// Draw one primitive on top of everything drawn so far
    fn draw(&mut self, primitive: Primitive) -> Result<(), RenderError>;

    /// Attach the ordered textual stop list
    fn show_route_info(&mut self, info: &RouteInfo);

    /// Replace all content with a diagnostic block
    fn show_placeholder(&mut self, placeholder: Placeholder);
}

/// Metrics that cannot measure anything; labels fall back to a fixed width
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTextMetrics;

impl TextMeasure for NoTextMetrics {
    fn measure_text(&self, _text: &str, _font: &Font) -> Option<f64> {
        None
    }
}

/// Monospace approximation: every character is `char_width` pixels wide
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthMetrics {
    pub char_width: f64,
}

impl FixedWidthMetrics {
    pub fn new(char_width: f64) -> Self {
        Self { char_width }
    }
}

impl TextMeasure for FixedWidthMetrics {
    fn measure_text(&self, text: &str, _font: &Font) -> Option<f64> {
        Some(text.chars().count() as f64 * self.char_width)
    }
}

/// What a surface currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    Empty,
    Drawing {
        primitives: Vec<Primitive>,
        route_info: Vec<String>,
    },
    Placeholder(Placeholder),
}

/// Surface that records primitives in call order.
///
/// Useful for checking z-order and for asserting that nothing was drawn.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    metrics: Option<FixedWidthMetrics>,
    content: Content,
    /// Total `draw` calls since creation, across resets
    draw_calls: usize,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            metrics: Some(FixedWidthMetrics::new(7.0)),
            content: Content::Empty,
            draw_calls: 0,
        }
    }

    pub fn without_text_metrics(mut self) -> Self {
        self.metrics = None;
        self
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn primitives(&self) -> &[Primitive] {
        match &self.content {
            Content::Drawing { primitives, .. } => primitives,
            _ => &[],
        }
    }

    pub fn route_info(&self) -> &[String] {
        match &self.content {
            Content::Drawing { route_info, .. } => route_info,
            _ => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        match &self.content {
            Content::Placeholder(p) => Some(p),
            _ => None,
        }
    }

    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&self, text: &str, font: &Font) -> Option<f64> {
        self.metrics.and_then(|m| m.measure_text(text, font))
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn reset(&mut self) {
        self.content = Content::Empty;
    }

    fn draw(&mut self, primitive: Primitive) -> Result<(), RenderError> {
        self.draw_calls += 1;
        if !primitive.is_finite() {
            return Err(RenderError::InvalidGeometry {
                primitive: primitive.kind(),
            });
        }
        match &mut self.content {
            Content::Drawing { primitives, .. } => primitives.push(primitive),
            other => {
                *other = Content::Drawing {
                    primitives: vec![primitive],
                    route_info: Vec::new(),
                }
            }
        }
        Ok(())
    }

    fn show_route_info(&mut self, info: &RouteInfo) {
        let lines = info.lines();
        match &mut self.content {
            Content::Drawing { route_info, .. } => *route_info = lines,
            other => {
                *other = Content::Drawing {
                    primitives: Vec::new(),
                    route_info: lines,
                }
            }
        }
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        self.content = Content::Placeholder(placeholder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::primitives::{CircleShape, Layer, ShapeStyle};
    use glam::dvec2;

    fn dot(x: f64) -> Primitive {
        CircleShape {
            layer: Layer::Marker,
            center: dvec2(x, 0.0),
            radius: 1.0,
            style: ShapeStyle::default(),
        }
        .into()
    }

    #[test]
    fn placeholder_replaces_drawing() {
        let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));
        surface.draw(dot(1.0)).unwrap();
        surface.show_placeholder(Placeholder::for_severity(Severity::Error));
        assert!(surface.primitives().is_empty());
        assert_eq!(surface.placeholder().unwrap().message, Placeholder::RENDER_FAILED);
    }

    #[test]
    fn reset_clears_previous_drawing() {
        let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));
        surface.draw(dot(1.0)).unwrap();
        surface.reset();
        surface.draw(dot(2.0)).unwrap();
        assert_eq!(surface.primitives(), &[dot(2.0)]);
        assert_eq!(surface.draw_calls(), 2);
    }

    #[test]
    fn rejects_non_finite_primitive() {
        let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));
        let err = surface.draw(dot(f64::INFINITY)).unwrap_err();
        assert!(matches!(err, RenderError::InvalidGeometry { primitive: "circle" }));
    }

    #[test]
    fn severity_classes() {
        assert_eq!(Severity::Info.css_class(), "alert-info");
        assert_eq!(Severity::Error.css_class(), "alert-danger");
    }
}
