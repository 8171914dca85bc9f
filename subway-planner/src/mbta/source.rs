//! The data-source abstraction the snapshot loader fetches through.

use tracing::{debug, info};

use super::error::MbtaError;
use super::types::{RouteRecord, Snapshot, StopRecord};

/// Trait for fetching subway routes and their stops.
///
/// This abstraction allows the loader to be tested with fixture data.
#[allow(async_fn_in_trait)]
pub trait TransitDataSource {
    /// Fetch all subway (light and heavy rail) routes, without stops.
    async fn fetch_subway_routes(&self) -> Result<Vec<RouteRecord>, MbtaError>;

    /// Fetch the stops served by one route.
    async fn fetch_stops_for_route(&self, route_id: &str) -> Result<Vec<StopRecord>, MbtaError>;

    /// Fetch every subway route and embed its stops, producing a snapshot.
    ///
    /// Routes keep the order the source returned them in. Any failed request
    /// fails the whole snapshot.
    async fn fetch_snapshot(&self) -> Result<Snapshot, MbtaError> {
        let routes = self.fetch_subway_routes().await?;
        info!(routes = routes.len(), "Fetching stops for subway routes");

        let mut data = Vec::with_capacity(routes.len());
        for mut route in routes {
            route.stops = self.fetch_stops_for_route(&route.id).await?;
            debug!(route = %route.id, stops = route.stops.len(), "Paired stops with route");
            data.push(route);
        }

        Ok(Snapshot { data })
    }
}

/// A data source that serves a fixed snapshot.
///
/// Used for offline runs and tests.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    snapshot: Snapshot,
}

impl FixtureSource {
    /// Create a source serving the given snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl TransitDataSource for FixtureSource {
    async fn fetch_subway_routes(&self) -> Result<Vec<RouteRecord>, MbtaError> {
        Ok(self
            .snapshot
            .data
            .iter()
            .filter(|r| matches!(r.attributes.route_type, Some(0) | Some(1)))
            .map(|r| RouteRecord {
                stops: Vec::new(),
                ..r.clone()
            })
            .collect())
    }

    async fn fetch_stops_for_route(&self, route_id: &str) -> Result<Vec<StopRecord>, MbtaError> {
        // The live API answers an unknown route filter with an empty list.
        Ok(self
            .snapshot
            .data
            .iter()
            .find(|r| r.id == route_id)
            .map(|r| r.stops.clone())
            .unwrap_or_default())
    }
}
