//! Subway route planner.
//!
//! Fetches MBTA subway routes and their stops, caches them on disk, and
//! answers three questions: which subway routes exist, which routes have
//! the most and fewest stops (and which stops link routes), and which
//! routes connect two named stops.

pub mod config;
pub mod domain;
pub mod mbta;
pub mod network;
pub mod report;
pub mod snapshot;
