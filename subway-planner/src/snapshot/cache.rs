//! Disk-based cache for the route snapshot.
//!
//! The file holds the [`Snapshot`] document exactly as it is serialised,
//! so it can be inspected or hand-edited. Its age is taken from the file's
//! modification time.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::{debug, info, warn};

use crate::mbta::{Snapshot, TransitDataSource};

use super::error::SnapshotError;

/// Default cache TTL: 24 hours. Subway routes rarely change.
const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Configuration for the snapshot disk cache.
#[derive(Debug, Clone)]
pub struct SnapshotCacheConfig {
    /// Path to the cache file.
    pub path: PathBuf,
    /// How long the cache remains valid.
    pub ttl: Duration,
}

impl SnapshotCacheConfig {
    /// Create a new cache config with the given path and default TTL (24 hours).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for SnapshotCacheConfig {
    fn default() -> Self {
        Self::new("stops_routes.json")
    }
}

/// Disk cache for the route snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    config: SnapshotCacheConfig,
}

impl SnapshotCache {
    /// Create a new snapshot cache with the given config.
    pub fn new(config: SnapshotCacheConfig) -> Self {
        Self { config }
    }

    /// Try to load the snapshot from the cache.
    ///
    /// Returns `None` if the cache doesn't exist, is invalid, or has expired.
    pub fn load(&self) -> Option<Snapshot> {
        let modified = std::fs::metadata(&self.config.path).ok()?.modified().ok()?;
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);
        if age >= self.config.ttl {
            debug!(path = %self.config.path.display(), age_secs = age.as_secs(), "Snapshot cache expired");
            return None;
        }

        match read_snapshot(&self.config.path) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(path = %self.config.path.display(), error = %e, "Ignoring unreadable snapshot cache");
                None
            }
        }
    }

    /// Save the snapshot to the cache.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| SnapshotError::Cache {
                message: format!("failed to create cache directory: {}", e),
            })?;
        }

        let json = serde_json::to_string_pretty(snapshot).map_err(|e| SnapshotError::Cache {
            message: format!("failed to serialize snapshot: {}", e),
        })?;

        std::fs::write(&self.config.path, json).map_err(|e| SnapshotError::Cache {
            message: format!("failed to write cache file: {}", e),
        })?;

        Ok(())
    }

    /// Get the cache file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

/// Read a snapshot file regardless of its age.
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, SnapshotError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| SnapshotError::Cache {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;

    serde_json::from_str(&contents).map_err(|e| SnapshotError::Cache {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}

/// Return the cached snapshot if it is fresh, otherwise fetch and cache it.
///
/// A failed fetch is fatal. A failed save is only logged: the fetched data
/// is still good for this run.
pub async fn load_or_fetch<S: TransitDataSource>(
    cache: &SnapshotCache,
    source: &S,
) -> Result<Snapshot, SnapshotError> {
    if let Some(snapshot) = cache.load() {
        info!(path = %cache.path().display(), routes = snapshot.data.len(), "Loaded snapshot from cache");
        return Ok(snapshot);
    }

    let snapshot = source.fetch_snapshot().await?;
    info!(routes = snapshot.data.len(), "Fetched snapshot");

    if let Err(e) = cache.save(&snapshot) {
        warn!(path = %cache.path().display(), error = %e, "Failed to save snapshot cache");
    }

    Ok(snapshot)
}
