//! MBTA v3 API response DTOs and the merged snapshot record.
//!
//! These types map directly to the JSON:API documents served by
//! `api-v3.mbta.com`. Attributes use `Option` liberally because the API
//! sends `null` for many of them, and unknown attributes are ignored.
//! `Snapshot` is also the on-disk cache format.

use serde::{Deserialize, Serialize};

/// Response from `GET /routes`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutesResponse {
    pub data: Vec<RouteRecord>,
}

/// Response from `GET /stops`.
#[derive(Debug, Clone, Deserialize)]
pub struct StopsResponse {
    pub data: Vec<StopRecord>,
}

/// The merged snapshot: every subway route with its stops embedded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub data: Vec<RouteRecord>,
}

/// A route resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Route id, e.g. "Red".
    pub id: String,

    /// JSON:API resource type, always "route".
    #[serde(rename = "type", default = "route_resource_type")]
    pub resource_type: String,

    pub attributes: RouteAttributes,

    /// Stops served by this route. Absent in `/routes` responses; filled in
    /// when the snapshot is assembled.
    #[serde(default)]
    pub stops: Vec<StopRecord>,
}

fn route_resource_type() -> String {
    "route".to_string()
}

/// Attributes of a route resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteAttributes {
    /// Display name, e.g. "Red Line".
    pub long_name: Option<String>,

    /// Short name; mostly empty for subway routes.
    pub short_name: Option<String>,

    /// e.g. "Rapid Transit".
    pub description: Option<String>,

    /// MBTA route type: 0 light rail, 1 heavy rail, 2 commuter rail,
    /// 3 bus, 4 ferry.
    #[serde(rename = "type")]
    pub route_type: Option<u8>,

    /// Hex colour without the leading `#`.
    pub color: Option<String>,

    pub text_color: Option<String>,

    pub sort_order: Option<i64>,

    #[serde(default)]
    pub direction_names: Vec<Option<String>>,

    #[serde(default)]
    pub direction_destinations: Vec<Option<String>>,
}

/// A stop resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    /// Stop id, e.g. "place-pktrm".
    pub id: String,

    /// JSON:API resource type, always "stop".
    #[serde(rename = "type", default = "stop_resource_type")]
    pub resource_type: String,

    pub attributes: StopAttributes,
}

fn stop_resource_type() -> String {
    "stop".to_string()
}

/// Attributes of a stop resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopAttributes {
    /// Display name, e.g. "Park Street".
    pub name: Option<String>,

    pub description: Option<String>,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    pub municipality: Option<String>,

    pub platform_name: Option<String>,

    /// 0 no information, 1 accessible, 2 inaccessible.
    pub wheelchair_boarding: Option<u8>,

    /// 0 stop/platform, 1 station, 2 entrance, 3 generic node.
    pub location_type: Option<u8>,
}

impl RouteRecord {
    /// Build a record with just the fields the planner needs.
    pub fn new(id: impl Into<String>, long_name: impl Into<String>, route_type: u8) -> Self {
        Self {
            id: id.into(),
            resource_type: route_resource_type(),
            attributes: RouteAttributes {
                long_name: Some(long_name.into()),
                route_type: Some(route_type),
                ..RouteAttributes::default()
            },
            stops: Vec::new(),
        }
    }

    /// Attach a stop list.
    pub fn with_stops(mut self, stops: Vec<StopRecord>) -> Self {
        self.stops = stops;
        self
    }
}

impl StopRecord {
    /// Build a record with just an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            resource_type: stop_resource_type(),
            attributes: StopAttributes {
                name: Some(name.into()),
                ..StopAttributes::default()
            },
        }
    }
}
