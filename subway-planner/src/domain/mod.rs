//! Domain types for the subway planner.
//!
//! This module contains the core domain model types that represent
//! validated transit data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod ids;
mod route;
mod stop;

pub use error::DomainError;
pub use ids::{InvalidId, RouteId, StopId};
pub use route::{Route, RouteKind};
pub use stop::Stop;
