//! Transfer-stop index.
//!
//! A transfer stop is one served by two or more routes. The index maps each
//! transfer stop to the routes that call there, which is everything the
//! connector needs to know about where a rider can change lines.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Route, Stop};

use super::table::RouteStopTable;

/// Map from transfer stop -> routes serving it.
///
/// Contains a stop iff at least two distinct routes serve it. Stops are
/// keyed by identity (id), and iterate in canonical (name, id) order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectivityIndex {
    transfers: BTreeMap<Stop, BTreeSet<Arc<Route>>>,
}

impl ConnectivityIndex {
    /// Build the index from a route table.
    pub fn build(table: &RouteStopTable) -> Self {
        let mut routes_by_stop: BTreeMap<&Stop, BTreeSet<Arc<Route>>> = BTreeMap::new();

        for route in table.routes() {
            for stop in &route.stops {
                routes_by_stop
                    .entry(stop)
                    .or_default()
                    .insert(route.clone());
            }
        }

        let transfers: BTreeMap<Stop, BTreeSet<Arc<Route>>> = routes_by_stop
            .into_iter()
            .filter(|(_, routes)| routes.len() >= 2)
            .map(|(stop, routes)| (stop.clone(), routes))
            .collect();

        debug!(transfer_stops = transfers.len(), "Built connectivity index");

        Self { transfers }
    }

    /// Routes serving a transfer stop, or `None` if the stop is not a
    /// transfer stop.
    pub fn routes_at(&self, stop: &Stop) -> Option<&BTreeSet<Arc<Route>>> {
        self.transfers.get(stop)
    }

    /// All transfer stops with their routes, in canonical stop order.
    pub fn transfers(&self) -> impl Iterator<Item = (&Stop, &BTreeSet<Arc<Route>>)> {
        self.transfers.iter()
    }

    /// Routes that share a transfer stop with `route`, excluding itself.
    pub fn neighbours(&self, route: &Route) -> BTreeSet<Arc<Route>> {
        route
            .stops
            .iter()
            .filter_map(|stop| self.transfers.get(stop))
            .flatten()
            .filter(|other| other.id != route.id)
            .cloned()
            .collect()
    }

    /// Get the number of transfer stops.
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    /// Check if there are no transfer stops.
    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }
}
