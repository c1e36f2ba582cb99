use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::Utc;
use crimedb_home::home::{render_html, FeatureCard, HomePage, HomePhase, FEATURES};
use crimedb_home::stats::{Applicant, StatItem, StatsSource};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

type SharedSource = Arc<dyn StatsSource>;

/// View state exposed by `GET /api/v1/home`.
#[derive(Debug, Serialize)]
pub(crate) struct HomeSnapshot {
    pub(crate) phase: HomePhase,
    pub(crate) stats: Vec<StatItem>,
    pub(crate) recent_applicants: Vec<Applicant>,
    pub(crate) features: Vec<FeatureCard>,
}

impl From<&HomePage> for HomeSnapshot {
    fn from(page: &HomePage) -> Self {
        Self {
            phase: page.phase(),
            stats: page.stats().to_vec(),
            recent_applicants: page.recent_applicants().to_vec(),
            features: FEATURES.to_vec(),
        }
    }
}

/// Landing page routes. Every request mounts a fresh view and reads the stats once.
pub fn home_router(source: Arc<dyn StatsSource>) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/api/v1/home", get(home_snapshot))
        .with_state(source)
}

pub(crate) fn with_operational_routes(router: Router) -> Router {
    router
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

async fn mount(source: &dyn StatsSource) -> HomePage {
    let mut page = HomePage::new();
    page.load(source).await;
    page
}

pub(crate) async fn home_page(State(source): State<SharedSource>) -> Html<String> {
    let page = mount(source.as_ref()).await;
    Html(render_html(&page, Utc::now()))
}

pub(crate) async fn home_snapshot(State(source): State<SharedSource>) -> Json<HomeSnapshot> {
    let page = mount(source.as_ref()).await;
    Json(HomeSnapshot::from(&page))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use crimedb_home::stats::{StatsError, StatsResponse};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    struct Unreachable;

    #[async_trait]
    impl StatsSource for Unreachable {
        async fn fetch_stats(&self) -> Result<StatsResponse, StatsError> {
            Err(StatsError::MissingData)
        }
    }

    fn app(ready: bool) -> Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_operational_routes(home_router(Arc::new(Unreachable))).layer(Extension(state))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router dispatch");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        (status, serde_json::from_slice(&body).expect("json"))
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let (status, payload) = get_json(app(false), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload["status"], "initializing");

        let (status, payload) = get_json(app(true), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ready");
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let (status, payload) = get_json(app(false), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn snapshot_falls_back_to_defaults_when_backend_fails() {
        let (status, payload) = get_json(app(true), "/api/v1/home").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["phase"], "defaults");
        assert_eq!(payload["stats"].as_array().map(Vec::len), Some(4));
        assert_eq!(payload["recent_applicants"], json!([]));
        assert_eq!(payload["features"][3]["link"], "/feedback");
    }
}
