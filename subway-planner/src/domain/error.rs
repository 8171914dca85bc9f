//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from API/IO errors.

use super::{InvalidId, RouteId, StopId};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A route or stop id failed validation
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    /// The MBTA route type code is not one we know
    #[error("unknown route type: {0}")]
    UnknownRouteType(u8),

    /// Two routes in one table share an id
    #[error("duplicate route id: {0}")]
    DuplicateRoute(RouteId),

    /// One stop id is listed under different names on different routes
    #[error("stop {id} is named both {first:?} and {second:?}")]
    InconsistentStop {
        id: StopId,
        first: String,
        second: String,
    },
}
