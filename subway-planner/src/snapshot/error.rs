//! Snapshot loading error types.

use crate::domain::DomainError;
use crate::mbta::{ConversionError, MbtaError};

/// Errors that can occur while obtaining the route snapshot.
///
/// Any of these aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Fetching from the data source failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] MbtaError),

    /// Snapshot records failed validation
    #[error("malformed snapshot: {0}")]
    Conversion(#[from] ConversionError),

    /// Routes were individually valid but inconsistent with each other
    #[error("inconsistent route data: {0}")]
    Domain(#[from] DomainError),

    /// Reading or writing the snapshot file failed
    #[error("cache error: {message}")]
    Cache { message: String },
}
