//! Ordered, human-readable stop list

use std::fmt;

use crate::errors::RenderError;
use crate::types::{Location, Route};

/// Shown instead of a stop list when the route is empty
pub const NO_ROUTE: &str = "No route available";

/// Where a stop falls in the route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopRole {
    Start,
    /// Interior stop, numbered by its position in the route
    Stop(usize),
    End,
}

impl fmt::Display for StopRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopRole::Start => write!(f, "Start"),
            StopRole::Stop(k) => write!(f, "Stop {k}"),
            StopRole::End => write!(f, "End"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopEntry {
    pub role: StopRole,
    pub name: String,
}

impl fmt::Display for StopEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteInfo {
    /// Route had no stops
    Empty,
    Stops(Vec<StopEntry>),
}

impl RouteInfo {
    /// One display line per stop, or the single "no route" line
    pub fn lines(&self) -> Vec<String> {
        match self {
            RouteInfo::Empty => vec![NO_ROUTE.to_string()],
            RouteInfo::Stops(entries) => entries.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Label every stop on `route`.
///
/// The first stop is always "Start", even on a single-stop route, so "End"
/// only appears once there are at least two stops.
pub fn format_route_info(route: &Route, locations: &[Location]) -> Result<RouteInfo, RenderError> {
    if route.is_empty() {
        return Ok(RouteInfo::Empty);
    }

    let last = route.len() - 1;
    let entries = route
        .stops()
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            let location = locations.get(index).ok_or(RenderError::UnknownLocation {
                position,
                index,
                count: locations.len(),
            })?;
            let role = match position {
                0 => StopRole::Start,
                p if p == last => StopRole::End,
                p => StopRole::Stop(p),
            };
            Ok(StopEntry {
                role,
                name: location.name.clone(),
            })
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    Ok(RouteInfo::Stops(entries))
}
