//! Routes and route types.

use std::fmt;

use super::error::DomainError;
use super::{RouteId, Stop};

/// MBTA route type, as carried in the `type` attribute of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteKind {
    /// Streetcar / light rail (Green Line, Mattapan Trolley).
    LightRail,
    /// Subway / heavy rail (Red, Orange, Blue).
    HeavyRail,
    CommuterRail,
    Bus,
    Ferry,
}

impl RouteKind {
    /// Parse the numeric MBTA route type.
    pub fn from_code(code: u8) -> Result<Self, DomainError> {
        match code {
            0 => Ok(RouteKind::LightRail),
            1 => Ok(RouteKind::HeavyRail),
            2 => Ok(RouteKind::CommuterRail),
            3 => Ok(RouteKind::Bus),
            4 => Ok(RouteKind::Ferry),
            other => Err(DomainError::UnknownRouteType(other)),
        }
    }

    /// Light and heavy rail together make up the subway.
    pub fn is_subway(self) -> bool {
        matches!(self, RouteKind::LightRail | RouteKind::HeavyRail)
    }
}

/// A rail line with its ordered list of stops.
///
/// Immutable once loaded. Field order drives the derived ordering: routes
/// sort by display name, then by id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Route {
    /// Display (long) name, e.g. "Red Line".
    pub name: String,
    pub id: RouteId,
    pub kind: RouteKind,
    /// Stops in the order the data source lists them.
    pub stops: Vec<Stop>,
}

impl Route {
    /// Create a new route.
    pub fn new(id: RouteId, name: impl Into<String>, kind: RouteKind, stops: Vec<Stop>) -> Self {
        Self {
            name: name.into(),
            id,
            kind,
            stops,
        }
    }

    /// Number of stops on this route.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Whether any stop on this route carries the given display name.
    pub fn serves(&self, stop_name: &str) -> bool {
        self.stops.iter().any(|s| s.name == stop_name)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
