use std::process::ExitCode;

use askama::Template;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use subway_planner::config::AppConfig;
use subway_planner::mbta::{FixtureSource, MbtaClient, Snapshot, TransitDataSource};
use subway_planner::network::{ConnectivityIndex, RouteStopTable};
use subway_planner::report::ReportTemplate;
use subway_planner::snapshot::{SnapshotCache, SnapshotError, load_or_fetch, read_snapshot};

/// The connection query shown in the report.
const EXAMPLE_QUERY: (&str, &str) = ("Ashmont", "Arlington");

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("subway_planner=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();

    let snapshot = match load_snapshot(&config).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!(error = %e, "Failed to load route data");
            return ExitCode::FAILURE;
        }
    };

    let table = match RouteStopTable::from_snapshot(&snapshot) {
        Ok(table) => table,
        Err(e) => {
            error!(error = %e, "Failed to build route table");
            return ExitCode::FAILURE;
        }
    };
    let index = ConnectivityIndex::build(&table);
    info!(
        routes = table.len(),
        transfer_stops = index.len(),
        "Route network ready"
    );

    let report = ReportTemplate::build(&table, &index, &[EXAMPLE_QUERY]);
    match report.render() {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to render report");
            ExitCode::FAILURE
        }
    }
}

/// Use the fixture file if one is configured, otherwise the disk cache or
/// the live API.
async fn load_snapshot(config: &AppConfig) -> Result<Snapshot, SnapshotError> {
    if let Some(path) = &config.fixture {
        info!(path = %path.display(), "Using fixture snapshot");
        let source = FixtureSource::new(read_snapshot(path)?);
        return Ok(source.fetch_snapshot().await?);
    }

    let client = MbtaClient::new(config.mbta.clone())?;
    let cache = SnapshotCache::new(config.cache.clone());
    load_or_fetch(&cache, &client).await
}
