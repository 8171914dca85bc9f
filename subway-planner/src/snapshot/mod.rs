//! Flat-file snapshot of the fetched route data.
//!
//! The snapshot is written once per fetch and re-read by later runs to
//! avoid hitting the API again.

mod cache;
mod error;

pub use cache::{SnapshotCache, SnapshotCacheConfig, load_or_fetch, read_snapshot};
pub use error::SnapshotError;
