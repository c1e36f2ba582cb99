use crate::cli::{apply_api_url, ServeArgs};
use crate::infra::{stats_source, AppState};
use crate::routes::{home_router, with_operational_routes};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use crimedb_home::config::AppConfig;
use crimedb_home::error::AppError;
use crimedb_home::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    apply_api_url(&mut config, args.api_url.take())?;

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source = stats_source(&config.backend)?;
    let app = with_operational_routes(home_router(source))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, backend = %config.backend.base_url, "crimedb home page ready");

    axum::serve(listener, app).await?;
    Ok(())
}
