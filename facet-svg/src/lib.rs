//! Facet-derived types for SVG serialization.
//!
//! This crate provides the strongly-typed subset of SVG that routeplot
//! emits: shapes, text, groups, and linear gradients. Documents are turned
//! into XML with `facet-xml`.
//!
//! # Example
//!
//! ```ignore
//! use facet_svg::{Rect, Svg, SvgNode};
//!
//! let svg = Svg {
//!     width: Some("100".to_string()),
//!     height: Some("100".to_string()),
//!     children: vec![SvgNode::Rect(Rect {
//!         x: Some(10.0),
//!         y: Some(10.0),
//!         width: Some(80.0),
//!         height: Some(80.0),
//!         fill: Some("blue".to_string()),
//!         ..Default::default()
//!     })],
//!     ..Default::default()
//! };
//!
//! let xml = facet_svg::facet_xml::to_string(&svg).unwrap();
//! assert!(xml.contains("rect"));
//! ```

use facet::Facet;
use facet_xml as xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(rename = "svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any SVG node routeplot emits
#[derive(Facet, Debug, Clone)]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "g")]
    G(Group),
    #[facet(rename = "defs")]
    Defs(Defs),
    #[facet(rename = "linearGradient")]
    LinearGradient(LinearGradient),
    #[facet(rename = "rect")]
    Rect(Rect),
    #[facet(rename = "circle")]
    Circle(Circle),
    #[facet(rename = "line")]
    Line(Line),
    #[facet(rename = "polygon")]
    Polygon(Polygon),
    #[facet(rename = "polyline")]
    Polyline(Polyline),
    #[facet(rename = "text")]
    Text(Text),
}

impl SvgNode {
    /// Element name as it appears in the serialized document
    pub fn tag(&self) -> &'static str {
        match self {
            SvgNode::G(_) => "g",
            SvgNode::Defs(_) => "defs",
            SvgNode::LinearGradient(_) => "linearGradient",
            SvgNode::Rect(_) => "rect",
            SvgNode::Circle(_) => "circle",
            SvgNode::Line(_) => "line",
            SvgNode::Polygon(_) => "polygon",
            SvgNode::Polyline(_) => "polyline",
            SvgNode::Text(_) => "text",
        }
    }
}

/// SVG group element (`<g>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Group {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// SVG defs element (`<defs>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Defs {
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// SVG linear gradient (`<linearGradient>`), referenced as `url(#id)`
#[derive(Facet, Debug, Clone, Default)]
pub struct LinearGradient {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute)]
    pub x1: Option<String>,
    #[facet(xml::attribute)]
    pub y1: Option<String>,
    #[facet(xml::attribute)]
    pub x2: Option<String>,
    #[facet(xml::attribute)]
    pub y2: Option<String>,
    #[facet(xml::elements)]
    pub stops: Vec<GradientNode>,
}

/// Children of a gradient element
#[derive(Facet, Debug, Clone)]
#[repr(u8)]
pub enum GradientNode {
    #[facet(rename = "stop")]
    Stop(GradientStop),
}

/// A `<stop>` inside a gradient
#[derive(Facet, Debug, Clone, Default)]
pub struct GradientStop {
    #[facet(xml::attribute)]
    pub offset: Option<String>,
    #[facet(xml::attribute, rename = "stop-color")]
    pub stop_color: Option<String>,
}

/// Common presentation attributes shared by shape elements
pub trait PresentationAttrs {
    fn fill(&self) -> Option<&str>;
    fn stroke(&self) -> Option<&str>;
    fn stroke_width(&self) -> Option<&str>;
    fn stroke_dasharray(&self) -> Option<&str>;
}

macro_rules! impl_presentation_attrs {
    ($($ty:ty),*) => {
        $(
            impl PresentationAttrs for $ty {
                fn fill(&self) -> Option<&str> { self.fill.as_deref() }
                fn stroke(&self) -> Option<&str> { self.stroke.as_deref() }
                fn stroke_width(&self) -> Option<&str> { self.stroke_width.as_deref() }
                fn stroke_dasharray(&self) -> Option<&str> { self.stroke_dasharray.as_deref() }
            }
        )*
    };
}

/// SVG rect element (`<rect>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Rect {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute)]
    pub width: Option<f64>,
    #[facet(xml::attribute)]
    pub height: Option<f64>,
    #[facet(xml::attribute)]
    pub rx: Option<f64>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
}

/// SVG circle element (`<circle>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Circle {
    #[facet(xml::attribute)]
    pub cx: Option<f64>,
    #[facet(xml::attribute)]
    pub cy: Option<f64>,
    #[facet(xml::attribute)]
    pub r: Option<f64>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
}

/// SVG line element (`<line>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Line {
    #[facet(xml::attribute)]
    pub x1: Option<f64>,
    #[facet(xml::attribute)]
    pub y1: Option<f64>,
    #[facet(xml::attribute)]
    pub x2: Option<f64>,
    #[facet(xml::attribute)]
    pub y2: Option<f64>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
}

/// SVG polygon element (`<polygon>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Polygon {
    #[facet(xml::attribute)]
    pub points: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
}

/// SVG polyline element (`<polyline>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Polyline {
    #[facet(xml::attribute)]
    pub points: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linejoin")]
    pub stroke_linejoin: Option<String>,
}

/// SVG text element (`<text>`)
#[derive(Facet, Debug, Clone, Default)]
pub struct Text {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "font-family")]
    pub font_family: Option<String>,
    #[facet(xml::attribute, rename = "font-size")]
    pub font_size: Option<String>,
    #[facet(xml::attribute, rename = "font-weight")]
    pub font_weight: Option<String>,
    #[facet(xml::attribute, rename = "text-anchor")]
    pub text_anchor: Option<String>,
    #[facet(xml::attribute, rename = "dominant-baseline")]
    pub dominant_baseline: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}

impl_presentation_attrs!(Rect, Circle, Line, Polygon, Polyline);

impl PresentationAttrs for Text {
    fn fill(&self) -> Option<&str> {
        self.fill.as_deref()
    }
    fn stroke(&self) -> Option<&str> {
        None
    }
    fn stroke_width(&self) -> Option<&str> {
        None
    }
    fn stroke_dasharray(&self) -> Option<&str> {
        None // Text doesn't have stroke-dasharray
    }
}

// Re-export facet_xml for convenience
pub use facet_xml;
