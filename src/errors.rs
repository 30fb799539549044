//! Error types with diagnostics using miette
//!
//! `RouteError` is what the orchestrator converts into a placeholder. Its two
//! families map onto the two placeholder severities: missing data is a normal
//! empty state, render errors are malfunctions.

use miette::Diagnostic;
use thiserror::Error;

use crate::render::Severity;
use crate::status::OrderStatus;

// ============================================================================
// Top-level
// ============================================================================

/// Any failure the route renderer can end in
#[derive(Error, Diagnostic, Debug)]
pub enum RouteError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    MissingData(#[from] MissingDataError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
}

impl RouteError {
    /// How the failure is presented to the user
    pub fn severity(&self) -> Severity {
        match self {
            RouteError::MissingData(_) => Severity::Info,
            RouteError::Render(_) => Severity::Error,
        }
    }
}

// ============================================================================
// Missing Data
// ============================================================================

/// Input was absent or not decodable at all
#[derive(Error, Diagnostic, Debug)]
pub enum MissingDataError {
    #[error("no location data supplied")]
    #[diagnostic(
        code(routeplot::input::no_locations),
        help("supply at least one location to draw a route map")
    )]
    NoLocations,

    #[error("missing `{attribute}` attribute")]
    #[diagnostic(code(routeplot::input::missing_attribute))]
    MissingAttribute { attribute: &'static str },

    #[error("`{attribute}` is not valid JSON")]
    #[diagnostic(code(routeplot::input::invalid_json))]
    InvalidJson {
        attribute: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors raised while decoding entries, projecting, or drawing
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("location {index} is malformed: {reason}")]
    #[diagnostic(
        code(routeplot::render::malformed_location),
        help("every location needs a string `name` and numeric `lat` and `lng`")
    )]
    MalformedLocation { index: usize, reason: String },

    #[error("route entry {position} is not a location index: {value}")]
    #[diagnostic(code(routeplot::render::invalid_route_entry))]
    InvalidRouteEntry { position: usize, value: String },

    #[error("route entry {position} refers to location {index}, but only {count} exist")]
    #[diagnostic(code(routeplot::render::unknown_location))]
    UnknownLocation {
        position: usize,
        index: usize,
        count: usize,
    },

    #[error("location {index} has a non-finite coordinate")]
    #[diagnostic(code(routeplot::render::non_finite_coordinate))]
    NonFiniteCoordinate { index: usize },

    #[error("surface {width}x{height} leaves no room inside {padding}px padding")]
    #[diagnostic(code(routeplot::render::surface_too_small))]
    SurfaceTooSmall {
        width: f64,
        height: f64,
        padding: f64,
    },

    #[error("render option `{option}` must be {requirement}, got {value}")]
    #[diagnostic(
        code(routeplot::render::invalid_options),
        help("the margin keeps the projected ranges non-zero; padding is an inset")
    )]
    InvalidOptions {
        option: &'static str,
        requirement: &'static str,
        value: f64,
    },

    #[error("infinite or NaN in {primitive} geometry")]
    #[diagnostic(code(routeplot::render::invalid_geometry))]
    InvalidGeometry { primitive: &'static str },

    #[error("SVG serialization failed: {message}")]
    #[diagnostic(code(routeplot::render::serialize))]
    Serialize { message: String },
}

// ============================================================================
// Summary Errors
// ============================================================================

/// Errors from preparing summary data for the charting collaborator
#[derive(Error, Diagnostic, Debug)]
pub enum SummaryError {
    #[error("`{attribute}` is not a number: {value:?}")]
    #[diagnostic(code(routeplot::summary::invalid_number))]
    InvalidNumber { attribute: &'static str, value: String },

    #[error("`{attribute}` is not valid JSON")]
    #[diagnostic(code(routeplot::summary::invalid_json))]
    InvalidJson {
        attribute: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("no usable entries in {dataset}")]
    #[diagnostic(
        code(routeplot::summary::partial_data),
        help("entries missing required fields are skipped")
    )]
    PartialData { dataset: &'static str },
}

impl SummaryError {
    pub fn severity(&self) -> Severity {
        match self {
            SummaryError::PartialData { .. } => Severity::Info,
            _ => Severity::Error,
        }
    }
}

// ============================================================================
// Status Errors
// ============================================================================

/// Errors from delivery status transitions
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum StatusError {
    #[error("unknown order status: {0:?}")]
    #[diagnostic(
        code(routeplot::status::unknown),
        help("expected one of pending, processing, shipped, delivered")
    )]
    Unknown(String),

    #[error("cannot move an order from {from} back to {to}")]
    #[diagnostic(code(routeplot::status::backward))]
    Backward { from: OrderStatus, to: OrderStatus },
}
