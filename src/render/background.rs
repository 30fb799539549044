//! Map-like backdrop: a pale green gradient with a light grid

use glam::dvec2;

use super::defaults;
use super::primitives::{Layer, Paint, Primitive, RectShape, SegmentShape, ShapeStyle};
use super::surface::Surface;
use crate::errors::RenderError;
use crate::types::Size;

/// Primitives for the backdrop of a surface of `size`
pub fn background_primitives(size: Size) -> Vec<Primitive> {
    let (w, h) = (size.width.raw(), size.height.raw());
    let mut prims: Vec<Primitive> = Vec::new();

    prims.push(
        RectShape {
            layer: Layer::Background,
            origin: dvec2(0.0, 0.0),
            size: dvec2(w, h),
            style: ShapeStyle::default().with_fill(Paint::VerticalGradient {
                top: defaults::GRADIENT_TOP,
                bottom: defaults::GRADIENT_BOTTOM,
            }),
        }
        .into(),
    );

    let grid = ShapeStyle::stroked(defaults::GRID_COLOR, defaults::GRID_STROKE_WIDTH);
    let vertical = grid_offsets(w).map(|x| (dvec2(x, 0.0), dvec2(x, h)));
    let horizontal = grid_offsets(h).map(|y| (dvec2(0.0, y), dvec2(w, y)));
    for (from, to) in vertical.chain(horizontal) {
        prims.push(
            SegmentShape {
                layer: Layer::Background,
                from,
                to,
                style: grid,
            }
            .into(),
        );
    }

    prims
}

/// Grid line positions `0, 30, 60, ...` strictly below `extent`
fn grid_offsets(extent: f64) -> impl Iterator<Item = f64> {
    (0..)
        .map(|i| i as f64 * defaults::GRID_SPACING)
        .take_while(move |&v| v < extent)
}

/// Draw the backdrop onto `surface`
pub fn draw_background<S: Surface + ?Sized>(surface: &mut S) -> Result<(), RenderError> {
    for prim in background_primitives(surface.size()) {
        surface.draw(prim)?;
    }
    Ok(())
}
