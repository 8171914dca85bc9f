//! Askama templates for the text report.

use askama::Template;

use crate::network::{ConnectError, ConnectivityIndex, RouteConnector, RouteStopTable};

use super::stats::{SharedStop, connected_stops, max_stops_route, min_stops_route};

/// The full report printed by the CLI.
#[derive(Template)]
#[template(path = "report.txt")]
pub struct ReportTemplate {
    pub route_names: Vec<String>,
    pub most_stops: Option<StopCountView>,
    pub fewest_stops: Option<StopCountView>,
    pub shared_stops: Vec<SharedStop>,
    pub connections: Vec<ConnectionView>,
}

/// A route name with its stop count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopCountView {
    pub route: String,
    pub count: usize,
}

impl From<(String, usize)> for StopCountView {
    fn from((route, count): (String, usize)) -> Self {
        Self { route, count }
    }
}

/// Outcome of one connection query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionView {
    pub from: String,
    pub to: String,
    pub outcome: Result<Vec<String>, ConnectError>,
}

impl ConnectionView {
    /// One line describing the outcome.
    pub fn summary(&self) -> String {
        match &self.outcome {
            Ok(routes) => format!("{} to {}: {}", self.from, self.to, routes.join(", ")),
            Err(ConnectError::UnknownStop(name)) => {
                format!("{} to {}: invalid stop {:?}", self.from, self.to, name)
            }
            Err(ConnectError::NoRoute { .. }) => {
                format!("{} to {}: route not found", self.from, self.to)
            }
        }
    }
}

impl ReportTemplate {
    /// Gather everything the report shows and answer each connection query.
    ///
    /// A failing query is recorded in its row; the rest still run.
    pub fn build(
        table: &RouteStopTable,
        index: &ConnectivityIndex,
        queries: &[(&str, &str)],
    ) -> Self {
        let connector = RouteConnector::new(table, index);

        let connections = queries
            .iter()
            .map(|(from, to)| ConnectionView {
                from: from.to_string(),
                to: to.to_string(),
                outcome: connector
                    .connect(from, to)
                    .map(|chain| chain.iter().map(|r| r.name.clone()).collect()),
            })
            .collect();

        Self {
            route_names: table.subway_routes().map(|r| r.name.clone()).collect(),
            most_stops: max_stops_route(table).map(StopCountView::from),
            fewest_stops: min_stops_route(table).map(StopCountView::from),
            shared_stops: connected_stops(index),
            connections,
        }
    }
}
