//! MBTA v3 API data source.
//!
//! This module provides an HTTP client for the MBTA v3 API and the
//! snapshot types it produces. The planner only needs two queries:
//! - `GET /routes?filter[type]=0,1` lists the subway (light and heavy rail)
//! - `GET /stops?filter[route]={id}` lists the stops on one route
//!
//! The results are merged into a [`Snapshot`], which is also what gets
//! written to disk.

mod client;
mod convert;
mod error;
mod source;
mod types;

pub use client::{MbtaClient, MbtaConfig};
pub use convert::{ConversionError, convert_route, convert_snapshot};
pub use error::MbtaError;
pub use source::{FixtureSource, TransitDataSource};
pub use types::{
    RouteAttributes, RouteRecord, RoutesResponse, Snapshot, StopAttributes, StopRecord,
    StopsResponse,
};
