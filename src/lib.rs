//! Schematic delivery-route maps.
//!
//! Given a list of geographic locations and the order to visit them in,
//! `routeplot` projects them onto a flat drawing surface and draws the route
//! with direction arrows, numbered legs, depot and stop markers, and labels.
//! No map tiles or cartographic projection are involved.
//!
//! ```ignore
//! let locations = r#"[{"name":"Depot","lat":0,"lng":0},{"name":"A","lat":0,"lng":1}]"#;
//! let html = routeplot::route_map_html(Some(locations), Some("[0, 1]"))?;
//! ```

pub mod errors;
pub mod input;
pub mod log;
pub mod render;
pub mod status;
pub mod summary;
pub mod types;

pub use errors::{MissingDataError, RenderError, RouteError, StatusError, SummaryError};
pub use input::RouteInput;
pub use render::{
    RecordingSurface, RenderOptions, RenderOutcome, RenderState, RouteRenderer, Severity,
    Surface, SvgSurface,
};
pub use types::{Location, Route, Size};

/// Render the serialized location list and route to an HTML fragment.
///
/// The fragment is either the SVG map followed by the stop list, or a single
/// alert block when there is nothing to draw or drawing failed. Only a
/// failure to serialize the finished document is returned as an error.
pub fn route_map_html(
    locations: Option<&str>,
    route: Option<&str>,
) -> Result<String, miette::Report> {
    let mut surface = SvgSurface::default();
    RouteRenderer::default().render_attributes(locations, route, &mut surface);
    Ok(surface.to_html()?)
}
