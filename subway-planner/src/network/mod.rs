//! The route network and connection search.
//!
//! Data flows one way: a [`RouteStopTable`] is built from the snapshot, a
//! [`ConnectivityIndex`] of transfer stops is derived from it, and a
//! [`RouteConnector`] answers queries over both. Everything here is built
//! once per run and read-only afterwards.

mod connectivity;
mod connector;
mod error;
mod table;

pub use connectivity::ConnectivityIndex;
pub use connector::{RouteChain, RouteConnector};
pub use error::ConnectError;
pub use table::RouteStopTable;
