//! Decoding the serialized location list and route
//!
//! Decoding happens in two passes. The outer JSON shape (two arrays) is
//! checked first; anything wrong there means there is no usable data. Entries
//! are then decoded one by one, and a bad entry is a render error.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{MissingDataError, RenderError, RouteError};
use crate::types::{Degrees, Location, Route};

/// Attribute holding the JSON location list
pub const LOCATIONS_ATTRIBUTE: &str = "data-locations";
/// Attribute holding the JSON route
pub const ROUTE_ATTRIBUTE: &str = "data-route";

#[derive(Debug, Deserialize)]
struct LocationRecord {
    name: String,
    lat: f64,
    lng: f64,
}

/// Decoded input for one render
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteInput {
    pub locations: Vec<Location>,
    pub route: Route,
}

impl RouteInput {
    /// Build input from already decoded values.
    ///
    /// Each location's `index` is set to its position in `locations`, which is
    /// what route entries and the depot option refer to.
    pub fn new(mut locations: Vec<Location>, route: Route) -> Self {
        for (position, location) in locations.iter_mut().enumerate() {
            location.index = position;
        }
        Self { locations, route }
    }

    /// Decode the two serialized attributes
    pub fn from_attributes(
        locations: Option<&str>,
        route: Option<&str>,
    ) -> Result<Self, RouteError> {
        let locations = locations.ok_or(MissingDataError::MissingAttribute {
            attribute: LOCATIONS_ATTRIBUTE,
        })?;
        let route = route.ok_or(MissingDataError::MissingAttribute {
            attribute: ROUTE_ATTRIBUTE,
        })?;

        let raw_locations = parse_array(LOCATIONS_ATTRIBUTE, locations)?;
        let raw_route = parse_array(ROUTE_ATTRIBUTE, route)?;

        if raw_locations.is_empty() {
            return Err(MissingDataError::NoLocations.into());
        }

        let locations = raw_locations
            .iter()
            .enumerate()
            .map(|(index, value)| decode_location(index, value))
            .collect::<Result<Vec<_>, _>>()?;

        let route = raw_route
            .iter()
            .enumerate()
            .map(|(position, value)| decode_route_entry(position, value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            locations,
            route: Route::new(route),
        })
    }
}

fn parse_array(attribute: &'static str, json: &str) -> Result<Vec<Value>, MissingDataError> {
    serde_json::from_str(json).map_err(|source| MissingDataError::InvalidJson { attribute, source })
}

fn decode_location(index: usize, value: &Value) -> Result<Location, RenderError> {
    let record = LocationRecord::deserialize(value).map_err(|e| RenderError::MalformedLocation {
        index,
        reason: e.to_string(),
    })?;
    let (Ok(lat), Ok(lng)) = (Degrees::try_new(record.lat), Degrees::try_new(record.lng)) else {
        return Err(RenderError::NonFiniteCoordinate { index });
    };
    Ok(Location {
        index,
        name: record.name,
        lat,
        lng,
    })
}

/// A route entry is a non-negative integer; integral floats such as `1.0`
/// are accepted too
fn decode_route_entry(position: usize, value: &Value) -> Result<usize, RenderError> {
    let integral = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
            .map(|f| f as u64)
    });
    integral
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| RenderError::InvalidRouteEntry {
            position,
            value: value.to_string(),
        })
}
