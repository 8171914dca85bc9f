//! Route connection search.
//!
//! Answers "which routes do I ride to get from stop A to stop B?". Two
//! searches are offered:
//!
//! - [`RouteConnector::connect`] expands stops breadth-first through transfer
//!   stops and accumulates every route it uses to reach a new transfer stop.
//!   The chain always ends with a route serving the destination, but it may
//!   carry routes that are not on the final path.
//! - [`RouteConnector::shortest_chain`] runs a breadth-first search over
//!   routes and returns a chain with as few routes as possible.
//!
//! Both iterate sets in canonical order, so a query always gives the same
//! answer for the same data.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{Route, RouteId, Stop};

use super::connectivity::ConnectivityIndex;
use super::error::ConnectError;
use super::table::RouteStopTable;

/// An ordered sequence of distinct routes linking two stops.
pub type RouteChain = Vec<Arc<Route>>;

/// Connection search over a route table and its transfer index.
#[derive(Debug, Clone, Copy)]
pub struct RouteConnector<'a> {
    table: &'a RouteStopTable,
    index: &'a ConnectivityIndex,
}

impl<'a> RouteConnector<'a> {
    /// Create a connector. `index` must have been built from `table`.
    pub fn new(table: &'a RouteStopTable, index: &'a ConnectivityIndex) -> Self {
        Self { table, index }
    }

    /// Route sets for both endpoints, or the first unknown stop.
    fn endpoints(
        &self,
        from: &str,
        to: &str,
    ) -> Result<(&'a BTreeSet<Arc<Route>>, &'a BTreeSet<Arc<Route>>), ConnectError> {
        for name in [from, to] {
            if !self.table.has_stop(name) {
                return Err(ConnectError::UnknownStop(name.to_string()));
            }
        }

        Ok((
            self.table.routes_containing(from),
            self.table.routes_containing(to),
        ))
    }

    /// Find a chain of routes from stop `from` to stop `to`, by display name.
    ///
    /// If the stops share a route, the chain is that single route (the first
    /// in canonical order). Otherwise stops are expanded in FIFO order from
    /// the origin: each expansion appends, for every unvisited transfer stop
    /// reachable on the current stop's routes, one route leading there, and
    /// the search ends as soon as the current stop is on a route serving the
    /// destination.
    ///
    /// Names are only resolved at the endpoints. Inside the search, transfer
    /// stops are tracked by identity, so two distinct stops sharing a display
    /// name are never merged.
    pub fn connect(&self, from: &str, to: &str) -> Result<RouteChain, ConnectError> {
        let (origin, destination) = self.endpoints(from, to)?;

        if let Some(route) = origin.intersection(destination).next() {
            debug!(from, to, route = %route.id, "Stops share a route");
            return Ok(vec![route.clone()]);
        }

        // Transfer stops carrying the origin's name are covered by expanding
        // the origin itself.
        let origin_stops: Vec<&Stop> = self
            .index
            .transfers()
            .map(|(stop, _)| stop)
            .filter(|stop| stop.name == from)
            .collect();

        let mut chain: RouteChain = Vec::new();
        let mut visited: HashSet<&Stop> = HashSet::new();
        let mut queued: HashSet<&Stop> = origin_stops.iter().copied().collect();
        let mut frontier: VecDeque<Expansion<'_>> = VecDeque::from([Expansion::Origin]);

        while let Some(next) = frontier.pop_front() {
            let serving = match next {
                Expansion::Origin => {
                    visited.extend(origin_stops.iter().copied());
                    origin
                }
                Expansion::Transfer(stop) => {
                    visited.insert(stop);
                    match self.index.routes_at(stop) {
                        Some(routes) => routes,
                        None => continue,
                    }
                }
            };

            trace!(?next, routes = serving.len(), chain = chain.len(), "Expanding stop");

            let mut reaching = serving.intersection(destination).peekable();
            if reaching.peek().is_some() {
                if let Some(route) = reaching.find(|r| !chain.contains(*r)) {
                    chain.push(route.clone());
                }
                debug!(from, to, routes = chain.len(), "Connected stops");
                return Ok(chain);
            }

            for (transfer, routes) in self.index.transfers() {
                if visited.contains(transfer) {
                    continue;
                }

                let mut connecting = routes.intersection(serving).peekable();
                if connecting.peek().is_none() {
                    continue;
                }

                if let Some(route) = connecting.find(|r| !chain.contains(*r)) {
                    chain.push(route.clone());
                }

                if queued.insert(transfer) {
                    frontier.push_back(Expansion::Transfer(transfer));
                }
            }
        }

        debug!(from, to, explored = visited.len(), "No connection found");
        Err(ConnectError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    /// Find a chain with the fewest routes from stop `from` to stop `to`.
    ///
    /// Breadth-first over routes, where two routes are adjacent if they share
    /// a transfer stop. Routes are expanded in canonical order, so among
    /// equally short chains the result is the same every time.
    pub fn shortest_chain(&self, from: &str, to: &str) -> Result<RouteChain, ConnectError> {
        let (origin, destination) = self.endpoints(from, to)?;

        let mut parents: HashMap<RouteId, Option<Arc<Route>>> = HashMap::new();
        let mut frontier: VecDeque<Arc<Route>> = VecDeque::new();

        for route in origin {
            parents.insert(route.id.clone(), None);
            frontier.push_back(route.clone());
        }

        while let Some(route) = frontier.pop_front() {
            if destination.contains(&route) {
                let chain = unwind(&parents, route);
                debug!(from, to, routes = chain.len(), "Found shortest chain");
                return Ok(chain);
            }

            for next in self.index.neighbours(&route) {
                if parents.contains_key(&next.id) {
                    continue;
                }
                parents.insert(next.id.clone(), Some(route.clone()));
                frontier.push_back(next);
            }
        }

        debug!(from, to, explored = parents.len(), "No connection found");
        Err(ConnectError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

/// An entry in the greedy search frontier.
#[derive(Debug, Clone, Copy)]
enum Expansion<'s> {
    /// Every stop with the origin's display name.
    Origin,
    Transfer(&'s Stop),
}

/// Follow parent links back to an origin route.
fn unwind(parents: &HashMap<RouteId, Option<Arc<Route>>>, last: Arc<Route>) -> RouteChain {
    let mut chain = vec![last];
    while let Some(Some(parent)) = chain.last().and_then(|r| parents.get(&r.id)) {
        chain.push(parent.clone());
    }
    chain.reverse();
    chain
}

#[cfg(test)]
#[path = "connector_tests.rs"]
mod tests;
