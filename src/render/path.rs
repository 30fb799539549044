//! Route path drawing: shadow, dashed route, then arrows and sequence badges.
//!
//! The three passes are emitted in that order and each pass finishes before
//! the next starts, so every arrow sits above every stretch of path.

use super::defaults;
use super::geometry::{BADGE_FONT, RouteGeometry, SegmentMark};
use super::primitives::{
    Baseline, CircleShape, Layer, PolygonShape, PolylineShape, Primitive, ShapeStyle, TextShape,
};
use super::surface::Surface;
use crate::errors::RenderError;

/// Primitives for a route, bottom to top
pub fn route_primitives(geometry: &RouteGeometry) -> Vec<Primitive> {
    if geometry.points.len() < 2 {
        return Vec::new();
    }

    let mut prims: Vec<Primitive> = Vec::with_capacity(2 + geometry.marks.len() * 3);

    prims.push(
        PolylineShape {
            layer: Layer::PathShadow,
            points: geometry.points.clone(),
            style: ShapeStyle::stroked(defaults::SHADOW_COLOR, defaults::SHADOW_STROKE_WIDTH),
        }
        .into(),
    );

    prims.push(
        PolylineShape {
            layer: Layer::RoutePath,
            points: geometry.points.clone(),
            style: ShapeStyle::stroked(defaults::BRAND, defaults::ROUTE_STROKE_WIDTH)
                .dashed(defaults::ROUTE_DASH),
        }
        .into(),
    );

    for mark in &geometry.marks {
        prims.extend(mark_primitives(mark));
    }

    prims
}

/// Arrowhead, badge circle, and badge number for one leg
fn mark_primitives(mark: &SegmentMark) -> [Primitive; 3] {
    [
        PolygonShape {
            layer: Layer::Arrows,
            vertices: mark.arrowhead.to_vec(),
            style: ShapeStyle::filled(defaults::BRAND),
        }
        .into(),
        CircleShape {
            layer: Layer::Arrows,
            center: mark.badge_center,
            radius: defaults::BADGE_RADIUS,
            style: ShapeStyle::filled(defaults::WHITE).with_stroke(defaults::BRAND_DARK, 1.0),
        }
        .into(),
        TextShape {
            layer: Layer::Arrows,
            anchor: mark.badge_center,
            content: mark.sequence.to_string(),
            font: BADGE_FONT,
            color: defaults::BRAND_DARK,
            baseline: Baseline::Middle,
        }
        .into(),
    ]
}

/// Draw the route onto `surface`
pub fn draw_route<S: Surface + ?Sized>(
    geometry: &RouteGeometry,
    surface: &mut S,
) -> Result<(), RenderError> {
    crate::log::debug!(
        stops = geometry.points.len(),
        legs = geometry.marks.len(),
        "drawing route path"
    );
    for prim in route_primitives(geometry) {
        surface.draw(prim)?;
    }
    Ok(())
}
