//! Route → stops table with a stop-name lookup.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use tracing::warn;

use crate::domain::{DomainError, Route, RouteId, StopId};
use crate::mbta::{Snapshot, convert_snapshot};
use crate::snapshot::SnapshotError;

static NO_ROUTES: BTreeSet<Arc<Route>> = BTreeSet::new();

/// Every loaded route with its stops, plus a precomputed
/// stop-name → routes map.
///
/// Built once per run and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStopTable {
    /// Routes in data-source order.
    routes: Vec<Arc<Route>>,

    /// Map from stop display name -> routes with a stop of that name.
    by_stop_name: HashMap<String, BTreeSet<Arc<Route>>>,
}

impl RouteStopTable {
    /// Build the table, checking that route ids are unique and that each
    /// stop id carries the same name on every route it appears on.
    pub fn new(routes: Vec<Route>) -> Result<Self, DomainError> {
        validate(&routes)?;

        let routes: Vec<Arc<Route>> = routes.into_iter().map(Arc::new).collect();

        let mut by_stop_name: HashMap<String, BTreeSet<Arc<Route>>> = HashMap::new();
        for route in &routes {
            for stop in &route.stops {
                by_stop_name
                    .entry(stop.name.clone())
                    .or_default()
                    .insert(route.clone());
            }
        }

        Ok(Self {
            routes,
            by_stop_name,
        })
    }

    /// Convert and validate a snapshot, then build the table from it.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        let routes = convert_snapshot(snapshot)?;
        Ok(Self::new(routes)?)
    }

    /// Routes with a stop of the given display name, in canonical order.
    ///
    /// Empty if no stop has that name.
    pub fn routes_containing(&self, stop_name: &str) -> &BTreeSet<Arc<Route>> {
        self.by_stop_name.get(stop_name).unwrap_or(&NO_ROUTES)
    }

    /// Whether any route has a stop with this display name.
    pub fn has_stop(&self, stop_name: &str) -> bool {
        self.by_stop_name.contains_key(stop_name)
    }

    /// All routes, in data-source order.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Look up a route by id.
    pub fn route(&self, id: &RouteId) -> Option<&Arc<Route>> {
        self.routes.iter().find(|r| &r.id == id)
    }

    /// Subway (light and heavy rail) routes, in data-source order.
    pub fn subway_routes(&self) -> impl Iterator<Item = &Arc<Route>> {
        self.routes.iter().filter(|r| r.kind.is_subway())
    }

    /// Every distinct stop name, sorted.
    pub fn stop_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_stop_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn validate(routes: &[Route]) -> Result<(), DomainError> {
    let mut route_ids: HashSet<&RouteId> = HashSet::new();
    let mut stop_names: HashMap<&StopId, &str> = HashMap::new();

    for route in routes {
        if !route_ids.insert(&route.id) {
            return Err(DomainError::DuplicateRoute(route.id.clone()));
        }

        for stop in &route.stops {
            match stop_names.entry(&stop.id) {
                Entry::Occupied(e) if *e.get() != stop.name => {
                    return Err(DomainError::InconsistentStop {
                        id: stop.id.clone(),
                        first: e.get().to_string(),
                        second: stop.name.clone(),
                    });
                }
                Entry::Occupied(_) => {}
                Entry::Vacant(e) => {
                    e.insert(&stop.name);
                }
            }
        }
    }

    // Queries address stops by name, so distinct stops sharing a name get
    // merged in lookups.
    let mut ids_by_name: HashMap<&str, BTreeSet<&StopId>> = HashMap::new();
    for (id, name) in &stop_names {
        ids_by_name.entry(*name).or_default().insert(*id);
    }
    for (name, ids) in ids_by_name.iter().filter(|(_, ids)| ids.len() > 1) {
        let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        warn!(stop = *name, ids = ?ids, "Stop name is shared by several stop ids");
    }

    Ok(())
}
