//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::mbta::MbtaConfig;
use crate::snapshot::SnapshotCacheConfig;

/// Everything `main` needs to obtain a snapshot.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mbta: MbtaConfig,
    pub cache: SnapshotCacheConfig,
    /// Serve this snapshot file instead of calling the API.
    pub fixture: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup (for testing).
    ///
    /// Recognised keys: `MBTA_API_KEY`, `MBTA_USERNAME`, `MBTA_BASE_URL`,
    /// `MBTA_SNAPSHOT_PATH`, `MBTA_SNAPSHOT_TTL_SECS`, `MBTA_FIXTURE`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fixture = lookup("MBTA_FIXTURE").map(PathBuf::from);

        let api_key = lookup("MBTA_API_KEY").unwrap_or_else(|| {
            if fixture.is_none() {
                warn!("MBTA_API_KEY not set; requests will be rate limited");
            }
            String::new()
        });
        let username = lookup("MBTA_USERNAME").unwrap_or_default();

        let mut mbta = MbtaConfig::new(api_key, username);
        if let Some(url) = lookup("MBTA_BASE_URL") {
            mbta = mbta.with_base_url(url);
        }

        let mut cache = lookup("MBTA_SNAPSHOT_PATH")
            .map(SnapshotCacheConfig::new)
            .unwrap_or_default();
        if let Some(raw) = lookup("MBTA_SNAPSHOT_TTL_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) => cache = cache.with_ttl(Duration::from_secs(secs)),
                Err(_) => warn!(value = %raw, "Ignoring invalid MBTA_SNAPSHOT_TTL_SECS"),
            }
        }

        Self {
            mbta,
            cache,
            fixture,
        }
    }
}
