//! Text report over the loaded network.

mod stats;
mod templates;

pub use stats::{SharedStop, connected_stops, max_stops_route, min_stops_route};
pub use templates::{ConnectionView, ReportTemplate, StopCountView};
