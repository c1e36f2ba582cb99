use async_trait::async_trait;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Duration, Utc};
use crimedb_home::config::BackendConfig;
use crimedb_home::home::{default_stats, format_created_at, HomePage, HomePhase};
use crimedb_home::stats::{
    Applicant, HttpStatsClient, StatItem, StatValue, StatsError, StatsResponse, StatsSource,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Replays a canned body (or error) and counts how often it was asked.
struct CannedSource {
    body: Option<Value>,
    calls: AtomicUsize,
}

impl CannedSource {
    fn ok(body: Value) -> Self {
        Self {
            body: Some(body),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            body: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsSource for CannedSource {
    async fn fetch_stats(&self) -> Result<StatsResponse, StatsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.body {
            Some(body) => Ok(serde_json::from_value(body.clone())?),
            None => Err(StatsError::Decode(
                serde_json::from_str::<Value>("<html>").expect_err("not json"),
            )),
        }
    }
}

fn applicant_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Complainant {id}"),
        "email": format!("c{id}@example.com"),
        "phone": "555-0100",
        "complaint_details": "Noise complaint",
        "status": status,
        "created_at": (Utc::now() - Duration::hours(3)).to_rfc3339(),
    })
}

#[tokio::test]
async fn stats_without_recent_entry_replace_defaults() {
    let source = CannedSource::ok(json!({
        "success": true,
        "data": [
            { "label": "Total Records", "value": 120 },
            { "label": "Active Cases", "value": 14 },
            { "label": "Records Added Today", "value": 2 }
        ]
    }));

    let mut page = HomePage::new();
    page.load(&source).await;

    assert_eq!(source.calls(), 1);
    assert!(!page.is_loading());
    assert_eq!(page.phase(), HomePhase::Loaded);
    assert!(page.recent_applicants().is_empty());
    assert_eq!(
        page.stats(),
        &[
            StatItem::count("Total Records", 120),
            StatItem::count("Active Cases", 14),
            StatItem::count("Records Added Today", 2),
        ]
    );
}

#[tokio::test]
async fn recent_entry_becomes_applicant_list() {
    let source = CannedSource::ok(json!({
        "success": true,
        "data": [
            { "label": "Total Records", "value": 120 },
            { "label": "recent Applicants", "value": [
                applicant_json(9, "Pending"),
                applicant_json(4, "Resolved"),
                applicant_json(6, "Pending")
            ]},
            { "label": "Recent Updates", "value": 5 }
        ]
    }));

    let mut page = HomePage::new();
    page.load(&source).await;

    let ids: Vec<i64> = page.recent_applicants().iter().map(|a| a.id).collect();
    assert_eq!(ids, [9, 4, 6]);
    let labels: Vec<&str> = page.stats().iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Total Records", "Recent Updates"]);
    assert_eq!(
        format_created_at(&page.recent_applicants()[0].created_at, Utc::now()),
        "3 hours ago"
    );
}

#[tokio::test]
async fn non_list_recent_entry_leaves_applicants_empty() {
    let source = CannedSource::ok(json!({
        "success": true,
        "data": [
            { "label": "Total Records", "value": 1 },
            { "label": "recent Applicants", "value": 3 }
        ]
    }));

    let mut page = HomePage::new();
    page.load(&source).await;

    assert!(page.recent_applicants().is_empty());
    assert_eq!(page.stats(), &[StatItem::count("Total Records", 1)]);
}

#[tokio::test]
async fn unsuccessful_response_keeps_placeholders() {
    let source = CannedSource::ok(json!({ "success": false, "data": [] }));

    let mut page = HomePage::new();
    page.load(&source).await;

    assert!(!page.is_loading());
    assert_eq!(page.phase(), HomePhase::Defaults);
    assert_eq!(page.stats(), default_stats().as_slice());
    assert_eq!(
        page.stats()
            .iter()
            .map(|s| (s.label.as_str(), s.value.clone()))
            .collect::<Vec<_>>(),
        [
            ("Total Records", StatValue::count(0)),
            ("Active Cases", StatValue::count(0)),
            ("Records Added Today", StatValue::count(0)),
            ("Recent Updates", StatValue::count(0)),
        ]
    );
}

#[tokio::test]
async fn failed_fetch_clears_loading_and_keeps_state() {
    let source = CannedSource::failing();

    let mut page = HomePage::new();
    page.load(&source).await;

    assert_eq!(source.calls(), 1);
    assert!(!page.is_loading());
    assert_eq!(page.phase(), HomePhase::Defaults);
    assert_eq!(page.stats(), default_stats().as_slice());
    assert!(page.recent_applicants().is_empty());
}

#[tokio::test]
async fn failed_refetch_keeps_previous_data() {
    let mut page = HomePage::new();
    page.load(&CannedSource::ok(json!({
        "success": true,
        "data": [{ "label": "recent Applicants", "value": [applicant_json(1, "Pending")] }]
    })))
    .await;
    page.load(&CannedSource::failing()).await;

    assert_eq!(page.recent_applicants().len(), 1);
    assert!(page.stats().is_empty());
}

async fn spawn_backend(router: Router) -> BackendConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind backend");
    let addr = listener.local_addr().expect("backend addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("backend serves");
    });
    BackendConfig {
        base_url: format!("http://{addr}"),
        timeout: None,
    }
}

#[tokio::test]
async fn http_client_reads_stats_endpoint() {
    let router = Router::new().route(
        "/stats",
        get(|| async {
            Json(json!({
                "success": true,
                "data": [
                    { "label": "Total Records", "value": 7 },
                    { "label": "recent Applicants", "value": [{ "id": 3, "name": "Lena", "status": "Pending" }] }
                ]
            }))
        }),
    );
    let config = spawn_backend(router).await;
    let client = HttpStatsClient::new(&config).expect("client builds");
    assert!(client.stats_url().ends_with("/stats"));

    let mut page = HomePage::new();
    page.load(&client).await;

    assert_eq!(page.stats(), &[StatItem::count("Total Records", 7)]);
    assert_eq!(
        page.recent_applicants(),
        &[Applicant {
            id: 3,
            name: "Lena".to_string(),
            status: "Pending".to_string(),
            ..Applicant::default()
        }]
    );
}

#[tokio::test]
async fn http_client_reports_non_json_bodies() {
    let router = Router::new().route("/stats", get(|| async { "upstream exploded" }));
    let config = spawn_backend(router).await;
    let client = HttpStatsClient::new(&config).expect("client builds");

    let err = client.fetch_stats().await.expect_err("body is not json");
    assert!(matches!(err, StatsError::Decode(_)));
}

#[tokio::test]
async fn http_client_reports_unreachable_backend() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);

    let client = HttpStatsClient::new(&BackendConfig {
        base_url: format!("http://{addr}"),
        timeout: Some(std::time::Duration::from_secs(5)),
    })
    .expect("client builds");

    let source: Arc<dyn StatsSource> = Arc::new(client);
    let err = source.fetch_stats().await.expect_err("nothing listening");
    assert!(matches!(err, StatsError::Network(_)));
}
