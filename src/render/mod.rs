//! Route map rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Sizes, offsets, and palette
//! - `projection`: lat/lng → pixel transform
//! - `geometry`: Pure route and marker geometry
//! - `primitives`: Drawing primitives handed to a surface
//! - `background`, `path`, `markers`: Draw steps, one per z-order group
//! - `route_info`: Textual stop list
//! - `surface`: The `Surface` trait and the recording surface
//! - `svg`: SVG surface
//!
//! `RouteRenderer` ties these together. Every render recomputes its
//! projection and geometry from scratch, then draws in a fixed order:
//! background, path, markers. Any failure replaces the surface content with a
//! placeholder; nothing is propagated to the caller.

pub mod background;
pub mod defaults;
pub mod geometry;
pub mod markers;
pub mod path;
pub mod primitives;
pub mod projection;
pub mod route_info;
pub mod surface;
pub mod svg;

pub use geometry::{Glyph, LabelGeometry, MarkerGeometry, MarkerRole, RouteGeometry, SegmentMark};
pub use primitives::{Drawable, Layer, Paint, Primitive, ShapeStyle};
pub use projection::{GeoBounds, Projection};
pub use route_info::{RouteInfo, StopEntry, StopRole, format_route_info};
pub use surface::{
    Content, FixedWidthMetrics, NoTextMetrics, Placeholder, RecordingSurface, Severity, Surface,
    TextMeasure,
};
pub use svg::SvgSurface;

use crate::errors::{MissingDataError, RenderError, RouteError};
use crate::input::RouteInput;
use crate::log::{debug, error, warn};
use crate::types::{Degrees, Px};

/// Per-renderer settings
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Inset reserved on every side of the surface
    pub padding: Px,
    /// Added to every side of the lat/lng bounding box
    pub margin: Degrees,
    /// Location drawn as the depot; `None` draws every location as a stop
    pub depot: Option<usize>,
    /// Draw the gradient and grid backdrop
    pub background: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            padding: defaults::PADDING,
            margin: defaults::MARGIN,
            depot: Some(0),
            background: true,
        }
    }
}

/// Where a renderer is in its pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    Idle,
    Validating,
    Rendering,
    Succeeded,
    Failed { severity: Severity },
}

impl RenderState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RenderState::Succeeded | RenderState::Failed { .. })
    }
}

/// Result of one render call
#[derive(Debug)]
pub struct RenderOutcome {
    pub state: RenderState,
    /// Stop list lines; empty after a failure
    pub route_info: Vec<String>,
    /// What went wrong, if anything
    pub error: Option<RouteError>,
}

impl RenderOutcome {
    pub fn is_success(&self) -> bool {
        self.state == RenderState::Succeeded
    }
}

/// Validates input, draws a route map, and recovers from every failure
#[derive(Debug, Clone, Default)]
pub struct RouteRenderer {
    options: RenderOptions,
    state: RenderState,
}

impl RouteRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            state: RenderState::Idle,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// State reached by the most recent render
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Render decoded input onto `surface`, replacing its content
    pub fn render<S: Surface>(&mut self, input: &RouteInput, surface: &mut S) -> RenderOutcome {
        self.begin(surface);
        let result = self.validate_and_draw(input, surface);
        self.finish(result, surface)
    }

    /// Decode the serialized attributes and render them onto `surface`.
    ///
    /// Decoding failures end in the same placeholder handling as drawing
    /// failures.
    pub fn render_attributes<S: Surface>(
        &mut self,
        locations: Option<&str>,
        route: Option<&str>,
        surface: &mut S,
    ) -> RenderOutcome {
        self.begin(surface);
        let result = RouteInput::from_attributes(locations, route)
            .and_then(|input| self.validate_and_draw(&input, surface));
        self.finish(result, surface)
    }

    fn transition(&mut self, next: RenderState) {
        debug!(from = ?self.state, to = ?next, "render state");
        self.state = next;
    }

    fn begin<S: Surface>(&mut self, surface: &mut S) {
        surface.reset();
        self.transition(RenderState::Validating);
    }

    fn validate_and_draw<S: Surface>(
        &mut self,
        input: &RouteInput,
        surface: &mut S,
    ) -> Result<Vec<String>, RouteError> {
        if input.locations.is_empty() {
            return Err(MissingDataError::NoLocations.into());
        }
        self.transition(RenderState::Rendering);
        Ok(self.draw(input, surface)?)
    }

    fn draw<S: Surface>(
        &self,
        input: &RouteInput,
        surface: &mut S,
    ) -> Result<Vec<String>, RenderError> {
        let locations = &input.locations;
        if let Some(depot) = self.options.depot
            && depot >= locations.len()
        {
            debug!(depot, count = locations.len(), "depot index outside location list");
        }

        // All geometry is computed before the first draw call, so a failure
        // never leaves a half-drawn map behind the placeholder.
        let projection = Projection::compute(
            locations,
            surface.size(),
            self.options.padding,
            self.options.margin,
        )?;
        let route = RouteGeometry::compute(&input.route, locations, &projection)?;
        let markers =
            MarkerGeometry::compute_all(locations, self.options.depot, &projection, &*surface);
        let info = format_route_info(&input.route, locations)?;

        if self.options.background {
            background::draw_background(surface)?;
        }
        path::draw_route(&route, surface)?;
        markers::draw_markers(&markers, surface)?;

        surface.show_route_info(&info);
        Ok(info.lines())
    }

    fn finish<S: Surface>(
        &mut self,
        result: Result<Vec<String>, RouteError>,
        surface: &mut S,
    ) -> RenderOutcome {
        match result {
            Ok(route_info) => {
                self.transition(RenderState::Succeeded);
                RenderOutcome {
                    state: self.state,
                    route_info,
                    error: None,
                }
            }
            Err(err) => {
                let severity = err.severity();
                match severity {
                    Severity::Info => {
                        warn!(error = %err, "route map has no data");
                    }
                    Severity::Error => {
                        error!(error = %err, "route map failed to render");
                    }
                }
                surface.show_placeholder(Placeholder::for_severity(severity));
                self.transition(RenderState::Failed { severity });
                RenderOutcome {
                    state: self.state,
                    route_info: Vec::new(),
                    error: Some(err),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, Route, Size};

    fn sample() -> RouteInput {
        RouteInput::new(
            vec![
                Location::new(0, "Depot", 0.0, 0.0),
                Location::new(1, "A", 0.0, 1.0),
                Location::new(2, "B", 1.0, 1.0),
            ],
            Route::new(vec![0, 1, 2]),
        )
    }

    fn surface() -> RecordingSurface {
        RecordingSurface::new(Size::new(800.0, 400.0))
    }

    #[test]
    fn starts_idle() {
        assert_eq!(RouteRenderer::default().state(), RenderState::Idle);
        assert!(!RenderState::Idle.is_terminal());
    }

    #[test]
    fn successful_render_reports_route_info() {
        let mut renderer = RouteRenderer::default();
        let mut surface = surface();
        let outcome = renderer.render(&sample(), &mut surface);
        assert!(outcome.is_success());
        assert!(outcome.error.is_none());
        assert_eq!(outcome.route_info, vec!["Start: Depot", "Stop 1: A", "End: B"]);
        assert_eq!(surface.route_info(), outcome.route_info.as_slice());
        assert_eq!(renderer.state(), RenderState::Succeeded);
    }

    #[test]
    fn empty_locations_fail_with_info() {
        let mut renderer = RouteRenderer::default();
        let mut surface = surface();
        let outcome = renderer.render(&RouteInput::default(), &mut surface);
        assert_eq!(
            outcome.state,
            RenderState::Failed {
                severity: Severity::Info
            }
        );
        assert_eq!(surface.draw_calls(), 0);
        assert_eq!(surface.placeholder().unwrap().message, Placeholder::NO_DATA);
    }

    #[test]
    fn unknown_route_index_fails_with_error_and_draws_nothing() {
        let mut input = sample();
        input.route = Route::new(vec![0, 5]);
        let mut renderer = RouteRenderer::default();
        let mut surface = surface();
        let outcome = renderer.render(&input, &mut surface);
        assert_eq!(
            outcome.state,
            RenderState::Failed {
                severity: Severity::Error
            }
        );
        assert!(matches!(
            outcome.error,
            Some(RouteError::Render(RenderError::UnknownLocation { index: 5, .. }))
        ));
        assert_eq!(surface.draw_calls(), 0);
    }

    #[test]
    fn rerender_replaces_previous_failure() {
        let mut renderer = RouteRenderer::default();
        let mut surface = surface();
        renderer.render(&RouteInput::default(), &mut surface);
        assert!(surface.placeholder().is_some());

        let outcome = renderer.render(&sample(), &mut surface);
        assert!(outcome.is_success());
        assert!(surface.placeholder().is_none());
        assert!(!surface.primitives().is_empty());
    }

    #[test]
    fn background_can_be_disabled() {
        let options = RenderOptions {
            background: false,
            ..RenderOptions::default()
        };
        let mut surface = surface();
        RouteRenderer::new(options).render(&sample(), &mut surface);
        assert!(
            surface
                .primitives()
                .iter()
                .all(|p| p.layer() != Layer::Background)
        );
    }

    #[test]
    fn zero_margin_fails_before_drawing() {
        let options = RenderOptions {
            margin: Degrees(0.0),
            ..RenderOptions::default()
        };
        let mut surface = surface();
        let outcome = RouteRenderer::new(options).render(&sample(), &mut surface);
        assert_eq!(
            outcome.state,
            RenderState::Failed {
                severity: Severity::Error
            }
        );
        assert!(matches!(
            outcome.error,
            Some(RouteError::Render(RenderError::InvalidOptions {
                option: "margin",
                ..
            }))
        ));
        assert_eq!(surface.draw_calls(), 0);
    }

    #[test]
    fn depot_follows_list_position() {
        // Indices that disagree with list order are renumbered on construction
        let input = RouteInput::new(
            vec![
                Location::new(7, "Depot", 0.0, 0.0),
                Location::new(3, "A", 0.0, 1.0),
            ],
            Route::new(vec![0, 1]),
        );
        assert_eq!(input.locations[0].index, 0);
        assert_eq!(input.locations[1].index, 1);

        let mut surface = surface();
        let outcome = RouteRenderer::default().render(&input, &mut surface);
        assert_eq!(outcome.route_info, vec!["Start: Depot", "End: A"]);
        let roofs = surface
            .primitives()
            .iter()
            .filter(|p| p.layer() == Layer::Marker && p.kind() == "polygon")
            .count();
        assert_eq!(roofs, 1);
    }

    #[test]
    fn tiny_surface_is_a_render_error() {
        let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));
        let outcome = RouteRenderer::default().render(&sample(), &mut surface);
        assert!(matches!(
            outcome.error,
            Some(RouteError::Render(RenderError::SurfaceTooSmall { .. }))
        ));
    }
}
