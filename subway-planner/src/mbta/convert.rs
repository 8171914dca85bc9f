//! Conversion from MBTA DTOs to domain types.
//!
//! Required fields are validated here, at the load boundary, so nothing
//! downstream has to deal with missing names or bad ids.

use tracing::warn;

use crate::domain::{DomainError, Route, RouteId, RouteKind, Stop, StopId};

use super::types::{RouteRecord, Snapshot, StopRecord};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("route {route:?}: missing required field: {field}")]
    MissingField { route: String, field: &'static str },

    /// A field was present but failed domain validation
    #[error("route {route:?}: {source}")]
    Invalid {
        route: String,
        #[source]
        source: DomainError,
    },
}

/// Convert a snapshot to domain routes, preserving snapshot order.
///
/// A malformed route fails the whole conversion. A malformed stop is
/// skipped with a warning, and a stop listed twice on one route is kept once.
pub fn convert_snapshot(snapshot: &Snapshot) -> Result<Vec<Route>, ConversionError> {
    snapshot.data.iter().map(convert_route).collect()
}

/// Convert a single route record, including its embedded stops.
pub fn convert_route(record: &RouteRecord) -> Result<Route, ConversionError> {
    let invalid = |source: DomainError| ConversionError::Invalid {
        route: record.id.clone(),
        source,
    };

    let id = RouteId::parse(&record.id).map_err(|e| invalid(e.into()))?;

    let name = non_empty(record.attributes.long_name.as_deref())
        .or_else(|| non_empty(record.attributes.short_name.as_deref()))
        .ok_or_else(|| ConversionError::MissingField {
            route: record.id.clone(),
            field: "attributes.long_name",
        })?;

    let code = record
        .attributes
        .route_type
        .ok_or_else(|| ConversionError::MissingField {
            route: record.id.clone(),
            field: "attributes.type",
        })?;
    let kind = RouteKind::from_code(code).map_err(invalid)?;

    let mut stops: Vec<Stop> = Vec::with_capacity(record.stops.len());
    for stop_record in &record.stops {
        match convert_stop(stop_record) {
            Ok(stop) => {
                if !stops.iter().any(|s| s.id == stop.id) {
                    stops.push(stop);
                }
            }
            Err(reason) => {
                warn!(route = %record.id, stop = %stop_record.id, reason, "Skipping malformed stop");
            }
        }
    }

    Ok(Route::new(id, name, kind, stops))
}

fn convert_stop(record: &StopRecord) -> Result<Stop, &'static str> {
    let id = StopId::parse(&record.id).map_err(|_| "invalid stop id")?;
    let name = non_empty(record.attributes.name.as_deref()).ok_or("missing stop name")?;
    Ok(Stop::new(id, name))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
