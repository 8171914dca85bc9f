//! Aggregate figures over the loaded network.

use std::cmp::Reverse;
use std::sync::Arc;

use crate::domain::Route;
use crate::network::{ConnectivityIndex, RouteStopTable};

/// A transfer stop and the names of the routes serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedStop {
    pub stop: String,
    pub routes: Vec<String>,
}

/// Routes in canonical order (display name, then id).
fn canonical(table: &RouteStopTable) -> Vec<&Arc<Route>> {
    let mut routes: Vec<&Arc<Route>> = table.routes().iter().collect();
    routes.sort();
    routes
}

/// The route with the most stops, with its stop count.
///
/// Ties go to the first route in canonical order. `None` for an empty table.
pub fn max_stops_route(table: &RouteStopTable) -> Option<(String, usize)> {
    canonical(table)
        .into_iter()
        .min_by_key(|r| Reverse(r.stop_count()))
        .map(|r| (r.name.clone(), r.stop_count()))
}

/// The route with the fewest stops, with its stop count.
///
/// Ties go to the first route in canonical order. `None` for an empty table.
pub fn min_stops_route(table: &RouteStopTable) -> Option<(String, usize)> {
    canonical(table)
        .into_iter()
        .min_by_key(|r| r.stop_count())
        .map(|r| (r.name.clone(), r.stop_count()))
}

/// Every transfer stop with the routes it connects, in stop order.
pub fn connected_stops(index: &ConnectivityIndex) -> Vec<SharedStop> {
    index
        .transfers()
        .map(|(stop, routes)| SharedStop {
            stop: stop.name.clone(),
            routes: routes.iter().map(|r| r.name.clone()).collect(),
        })
        .collect()
}
