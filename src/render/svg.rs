//! SVG surface
//!
//! Primitives become `facet_svg` nodes as they are drawn. Serialization only
//! happens in `to_svg`, so a placeholder can still replace everything up to
//! that point.

use facet_svg::facet_xml::SerializeOptions;
use facet_svg::{
    Circle, Defs, GradientNode, GradientStop, Group, Line, LinearGradient, Polygon, Polyline,
    Rect, SVG_NS, Svg, SvgNode, Text, facet_xml,
};
use glam::DVec2;

use super::defaults;
use super::primitives::{Baseline, Drawable, Font, Paint, Primitive, ShapeStyle};
use super::route_info::{NO_ROUTE, RouteInfo};
use super::surface::{Placeholder, Severity, Surface, TextMeasure};
use crate::errors::RenderError;
use crate::types::{Color, Size};

/// Proportional character widths in hundredths of an em-ish unit, for
/// printable ASCII starting at `' '`.
#[rustfmt::skip]
pub const AW_CHAR: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Pixels per table unit per pixel of font size
const WIDTH_PER_UNIT: f64 = 0.01 * 0.5714;
const BOLD_WIDTH_SCALE: f64 = 1.1;

/// Placeholder colors: (background, text)
const INFO_COLORS: (Color, Color) = (Color::hex(0xcff4fc), Color::hex(0x055160));
const DANGER_COLORS: (Color, Color) = (Color::hex(0xf8d7da), Color::hex(0x842029));

/// Sum of `AW_CHAR` widths; characters outside the table count as 100
pub fn text_length(text: &str) -> u32 {
    text.chars()
        .map(|c| {
            if (' '..='~').contains(&c) {
                AW_CHAR[(c as usize) - 0x20] as u32
            } else {
                100
            }
        })
        .sum()
}

/// Estimated rendered width of `text` in pixels
pub fn proportional_width(text: &str, font: &Font) -> f64 {
    let scale = if font.bold { BOLD_WIDTH_SCALE } else { 1.0 };
    text_length(text) as f64 * WIDTH_PER_UNIT * font.size * scale
}

/// Surface that builds an SVG document
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: Size,
    text_metrics: bool,
    gradients: Vec<SvgNode>,
    nodes: Vec<SvgNode>,
    route_info: Option<RouteInfo>,
    placeholder: Option<Placeholder>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(Size {
            width: defaults::SURFACE_WIDTH,
            height: defaults::SURFACE_HEIGHT,
        })
    }
}

impl SvgSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            text_metrics: true,
            gradients: Vec::new(),
            nodes: Vec::new(),
            route_info: None,
            placeholder: None,
        }
    }

    /// Disable text measurement; labels use the fixed fallback width
    pub fn without_text_metrics(mut self) -> Self {
        self.text_metrics = false;
        self
    }

    pub fn route_info(&self) -> Option<&RouteInfo> {
        self.route_info.as_ref()
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }

    /// Number of top-level shape nodes drawn so far
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The document as a facet DOM
    pub fn to_document(&self) -> Svg {
        let (w, h) = (self.size.width.raw(), self.size.height.raw());
        let children = match &self.placeholder {
            Some(placeholder) => vec![placeholder_node(placeholder, self.size)],
            None => {
                let mut children = Vec::with_capacity(self.nodes.len() + 1);
                if !self.gradients.is_empty() {
                    children.push(SvgNode::Defs(Defs {
                        children: self.gradients.clone(),
                    }));
                }
                children.extend(self.nodes.iter().cloned());
                children
            }
        };

        Svg {
            xmlns: Some(SVG_NS.to_string()),
            width: Some(fmt_num(w)),
            height: Some(fmt_num(h)),
            view_box: Some(format!("0 0 {} {}", fmt_num(w), fmt_num(h))),
            class: Some("route-map".to_string()),
            children,
        }
    }

    /// Serialize the current content to an SVG document
    pub fn to_svg(&self) -> Result<String, RenderError> {
        fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
            write!(writer, "{}", fmt_num(value))
        }

        let options = SerializeOptions {
            float_formatter: Some(format_float),
            ..Default::default()
        };
        facet_xml::to_string_with_options(&self.to_document(), &options).map_err(|e| {
            RenderError::Serialize {
                message: e.to_string(),
            }
        })
    }

    /// The stop list as an HTML `<ul>`, empty if there is none
    pub fn route_info_html(&self) -> String {
        let Some(info) = &self.route_info else {
            return String::new();
        };
        let mut out = String::from("<ul class=\"list-unstyled mb-0\">");
        match info {
            RouteInfo::Empty => {
                out.push_str("<li>");
                out.push_str(NO_ROUTE);
                out.push_str("</li>");
            }
            RouteInfo::Stops(entries) => {
                for entry in entries {
                    out.push_str(&format!(
                        "<li><strong>{}:</strong> {}</li>",
                        entry.role,
                        escape_html(&entry.name)
                    ));
                }
            }
        }
        out.push_str("</ul>");
        out
    }

    /// Map plus stop list as an HTML fragment, or the alert block alone
    pub fn to_html(&self) -> Result<String, RenderError> {
        if let Some(placeholder) = &self.placeholder {
            return Ok(format!(
                "<div class=\"alert {}\">{}</div>",
                placeholder.severity.css_class(),
                escape_html(&placeholder.message)
            ));
        }
        let svg = self.to_svg()?;
        let info = self.route_info_html();
        if info.is_empty() {
            Ok(svg)
        } else {
            Ok(format!("{svg}\n<div class=\"route-info\">{info}</div>"))
        }
    }

    fn paint(&mut self, paint: &Paint) -> String {
        match paint {
            Paint::Solid(color) => color.to_string(),
            Paint::VerticalGradient { top, bottom } => {
                let id = format!("routeplot-gradient-{}", self.gradients.len());
                let stop = |offset: &str, color: &Color| {
                    GradientNode::Stop(GradientStop {
                        offset: Some(offset.to_string()),
                        stop_color: Some(color.to_string()),
                    })
                };
                self.gradients.push(SvgNode::LinearGradient(LinearGradient {
                    id: Some(id.clone()),
                    x1: Some("0".to_string()),
                    y1: Some("0".to_string()),
                    x2: Some("0".to_string()),
                    y2: Some("1".to_string()),
                    stops: vec![stop("0", top), stop("1", bottom)],
                }));
                format!("url(#{id})")
            }
        }
    }

    fn to_node(&mut self, primitive: Primitive) -> SvgNode {
        match primitive {
            Primitive::Rect(r) => {
                let (stroke, stroke_width, stroke_dasharray) = stroke_attrs(&r.style);
                SvgNode::Rect(Rect {
                    x: Some(r.origin.x),
                    y: Some(r.origin.y),
                    width: Some(r.size.x),
                    height: Some(r.size.y),
                    fill: Some(self.paint(&r.style.fill)),
                    stroke,
                    stroke_width,
                    stroke_dasharray,
                    ..Default::default()
                })
            }
            Primitive::Polygon(p) => {
                let (stroke, stroke_width, stroke_dasharray) = stroke_attrs(&p.style);
                SvgNode::Polygon(Polygon {
                    points: Some(points_attr(&p.vertices)),
                    fill: Some(self.paint(&p.style.fill)),
                    stroke,
                    stroke_width,
                    stroke_dasharray,
                    ..Default::default()
                })
            }
            Primitive::Polyline(p) => {
                let (stroke, stroke_width, stroke_dasharray) = stroke_attrs(&p.style);
                SvgNode::Polyline(Polyline {
                    points: Some(points_attr(&p.points)),
                    fill: Some("none".to_string()),
                    stroke,
                    stroke_width,
                    stroke_dasharray,
                    stroke_linejoin: Some("round".to_string()),
                    ..Default::default()
                })
            }
            Primitive::Circle(c) => {
                let (stroke, stroke_width, stroke_dasharray) = stroke_attrs(&c.style);
                SvgNode::Circle(Circle {
                    cx: Some(c.center.x),
                    cy: Some(c.center.y),
                    r: Some(c.radius),
                    fill: Some(self.paint(&c.style.fill)),
                    stroke,
                    stroke_width,
                    stroke_dasharray,
                    ..Default::default()
                })
            }
            Primitive::Segment(s) => {
                let (stroke, stroke_width, stroke_dasharray) = stroke_attrs(&s.style);
                SvgNode::Line(Line {
                    x1: Some(s.from.x),
                    y1: Some(s.from.y),
                    x2: Some(s.to.x),
                    y2: Some(s.to.y),
                    stroke,
                    stroke_width,
                    stroke_dasharray,
                    ..Default::default()
                })
            }
            Primitive::Text(t) => SvgNode::Text(Text {
                x: Some(t.anchor.x),
                y: Some(t.anchor.y),
                fill: Some(t.color.to_string()),
                font_family: Some(defaults::FONT_FAMILY.to_string()),
                font_size: Some(format!("{}px", fmt_num(t.font.size))),
                font_weight: t.font.bold.then(|| "bold".to_string()),
                text_anchor: Some("middle".to_string()),
                dominant_baseline: Some(
                    match t.baseline {
                        Baseline::Alphabetic => "alphabetic",
                        Baseline::Middle => "middle",
                    }
                    .to_string(),
                ),
                content: t.content,
                ..Default::default()
            }),
        }
    }
}

impl TextMeasure for SvgSurface {
    fn measure_text(&self, text: &str, font: &Font) -> Option<f64> {
        self.text_metrics.then(|| proportional_width(text, font))
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn reset(&mut self) {
        self.gradients.clear();
        self.nodes.clear();
        self.route_info = None;
        self.placeholder = None;
    }

    fn draw(&mut self, primitive: Primitive) -> Result<(), RenderError> {
        if !primitive.is_finite() {
            return Err(RenderError::InvalidGeometry {
                primitive: primitive.kind(),
            });
        }
        let node = self.to_node(primitive);
        self.nodes.push(node);
        Ok(())
    }

    fn show_route_info(&mut self, info: &RouteInfo) {
        self.route_info = Some(info.clone());
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        self.reset();
        self.placeholder = Some(placeholder);
    }
}

/// `(stroke, stroke-width, stroke-dasharray)`; all absent for unstroked shapes
fn stroke_attrs(style: &ShapeStyle) -> (Option<String>, Option<String>, Option<String>) {
    if style.stroke == Color::None || style.stroke_width <= 0.0 {
        return (None, None, None);
    }
    (
        Some(style.stroke.to_string()),
        Some(fmt_num(style.stroke_width)),
        style
            .dash
            .map(|[on, off]| format!("{},{}", fmt_num(on), fmt_num(off))),
    )
}

fn points_attr(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn placeholder_node(placeholder: &Placeholder, size: Size) -> SvgNode {
    let (w, h) = (size.width.raw(), size.height.raw());
    let (background, foreground) = match placeholder.severity {
        Severity::Info => INFO_COLORS,
        Severity::Error => DANGER_COLORS,
    };
    SvgNode::G(Group {
        class: Some(format!("alert {}", placeholder.severity.css_class())),
        children: vec![
            SvgNode::Rect(Rect {
                x: Some(0.0),
                y: Some(0.0),
                width: Some(w),
                height: Some(h),
                rx: Some(4.0),
                fill: Some(background.to_string()),
                ..Default::default()
            }),
            SvgNode::Text(Text {
                x: Some(w / 2.0),
                y: Some(h / 2.0),
                fill: Some(foreground.to_string()),
                font_family: Some(defaults::FONT_FAMILY.to_string()),
                font_size: Some("14px".to_string()),
                text_anchor: Some("middle".to_string()),
                dominant_baseline: Some("middle".to_string()),
                content: placeholder.message.clone(),
                ..Default::default()
            }),
        ],
        ..Default::default()
    })
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a number with 6 significant figures, trailing zeros trimmed
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
