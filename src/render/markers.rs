//! Location markers and labels
//!
//! All shadows go down first, then all glyphs, then all labels, so a label
//! is never hidden under a neighbouring marker.

use super::defaults;
use super::geometry::{Bounds, Glyph, LABEL_FONT, LabelGeometry, MarkerGeometry};
use super::primitives::{
    Baseline, CircleShape, Layer, PolygonShape, Primitive, RectShape, SegmentShape, ShapeStyle,
    TextShape,
};
use super::surface::Surface;
use crate::errors::RenderError;
use crate::types::Color;

fn rect(layer: Layer, bounds: Bounds, style: ShapeStyle) -> Primitive {
    RectShape {
        layer,
        origin: bounds.origin,
        size: bounds.size,
        style,
    }
    .into()
}

fn shadow_primitive(marker: &MarkerGeometry) -> Primitive {
    CircleShape {
        layer: Layer::MarkerShadow,
        center: marker.shadow_center,
        radius: marker.shadow_radius,
        style: ShapeStyle::filled(defaults::SHADOW_COLOR),
    }
    .into()
}

fn glyph_primitives(glyph: &Glyph) -> Vec<Primitive> {
    let body_style = ShapeStyle::filled(body_color(glyph));
    match glyph {
        Glyph::Depot { body, roof, door } => vec![
            rect(Layer::Marker, *body, body_style),
            PolygonShape {
                layer: Layer::Marker,
                vertices: roof.to_vec(),
                style: body_style,
            }
            .into(),
            rect(Layer::Marker, *door, ShapeStyle::filled(defaults::BRAND_PALE)),
        ],
        Glyph::Stop { body, ribbon } => {
            let mut prims = vec![rect(Layer::Marker, *body, body_style)];
            let ribbon_style =
                ShapeStyle::stroked(defaults::BRAND_PALE, defaults::RIBBON_STROKE_WIDTH);
            prims.extend(ribbon.iter().map(|&(from, to)| {
                Primitive::from(SegmentShape {
                    layer: Layer::Marker,
                    from,
                    to,
                    style: ribbon_style,
                })
            }));
            prims
        }
    }
}

fn label_primitives(label: &LabelGeometry) -> [Primitive; 2] {
    [
        rect(
            Layer::Label,
            label.frame,
            ShapeStyle::filled(defaults::LABEL_BACKGROUND).with_stroke(defaults::LABEL_BORDER, 1.0),
        ),
        TextShape {
            layer: Layer::Label,
            anchor: label.baseline,
            content: label.text.clone(),
            font: LABEL_FONT,
            color: defaults::LABEL_TEXT,
            baseline: Baseline::Alphabetic,
        }
        .into(),
    ]
}

/// Primitives for every marker, bottom to top
pub fn marker_primitives(markers: &[MarkerGeometry]) -> Vec<Primitive> {
    let shadows = markers.iter().map(shadow_primitive);
    let glyphs = markers.iter().flat_map(|m| glyph_primitives(&m.glyph));
    let labels = markers.iter().flat_map(|m| label_primitives(&m.label));
    shadows.chain(glyphs).chain(labels).collect()
}

/// Draw all markers onto `surface`
pub fn draw_markers<S: Surface + ?Sized>(
    markers: &[MarkerGeometry],
    surface: &mut S,
) -> Result<(), RenderError> {
    let unmeasured = markers.iter().filter(|m| !m.label.measured).count();
    if unmeasured > 0 {
        crate::log::debug!(unmeasured, "text metrics unavailable, using fixed-width labels");
    }
    for prim in marker_primitives(markers) {
        surface.draw(prim)?;
    }
    Ok(())
}

/// Fill color of a marker's main body
pub fn body_color(glyph: &Glyph) -> Color {
    match glyph {
        Glyph::Depot { .. } => defaults::BRAND_DARK,
        Glyph::Stop { .. } => defaults::BRAND_LIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::geometry::MarkerRole;
    use crate::render::primitives::{Drawable, Paint};
    use crate::render::projection::Projection;
    use crate::render::surface::FixedWidthMetrics;
    use crate::types::{Location, Size};

    fn markers() -> Vec<MarkerGeometry> {
        let locations = vec![
            Location::new(0, "Depot", 0.0, 0.0),
            Location::new(1, "A", 0.0, 1.0),
        ];
        let projection = Projection::compute(
            &locations,
            Size::new(800.0, 400.0),
            defaults::PADDING,
            defaults::MARGIN,
        )
        .unwrap();
        MarkerGeometry::compute_all(&locations, Some(0), &projection, &FixedWidthMetrics::new(6.0))
    }

    #[test]
    fn shadows_then_glyphs_then_labels() {
        let prims = marker_primitives(&markers());
        let layers: Vec<_> = prims.iter().map(|p| p.layer()).collect();
        let mut sorted = layers.clone();
        sorted.sort();
        assert_eq!(layers, sorted);
        // 2 shadows, depot (3) + stop (3) glyph parts, 2 * 2 label parts
        assert_eq!(prims.len(), 2 + 6 + 4);
    }

    #[test]
    fn depot_and_stop_glyphs_differ() {
        let m = markers();
        assert_eq!(m[0].role, MarkerRole::Depot);
        let depot = glyph_primitives(&m[0].glyph);
        let stop = glyph_primitives(&m[1].glyph);
        assert!(matches!(depot[1], Primitive::Polygon(_)), "depot has a roof");
        assert!(matches!(stop[1], Primitive::Segment(_)), "stop has a ribbon");
        assert_ne!(body_color(&m[0].glyph), body_color(&m[1].glyph));
    }

    #[test]
    fn label_has_translucent_fill_and_border() {
        let m = markers();
        let [frame, text] = label_primitives(&m[0].label);
        let Primitive::Rect(frame) = frame else {
            panic!("expected label frame rect");
        };
        assert_eq!(frame.style.fill, Paint::Solid(defaults::LABEL_BACKGROUND));
        assert_eq!(frame.style.stroke, defaults::LABEL_BORDER);
        let Primitive::Text(text) = text else {
            panic!("expected label text");
        };
        assert_eq!(text.content, "Depot");
    }
}
