use crimedb_home::config::BackendConfig;
use crimedb_home::error::AppError;
use crimedb_home::stats::{HttpStatsClient, StatsSource};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn stats_source(config: &BackendConfig) -> Result<Arc<dyn StatsSource>, AppError> {
    let client = HttpStatsClient::new(config)?;
    info!(url = %client.stats_url(), timeout = ?config.timeout, "stats source configured");
    Ok(Arc::new(client))
}
