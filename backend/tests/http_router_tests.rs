//! Router tests driven through `tower::ServiceExt::oneshot`.

#![cfg(feature = "http-server")]

mod support;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceExt;

use rig_inspect::api::{ApiError, Inspection, ReportData, Rig, RigPerformance};
use rig_inspect::db::repositories::LocalRepository;
use rig_inspect::db::FullRepository;
use rig_inspect::http::{create_router, AppState};

fn app_with(token: Option<&str>) -> Router {
    let repo: Arc<dyn FullRepository> =
        Arc::new(LocalRepository::with_seed(support::sample_seed()));
    create_router(AppState::new(repo).with_api_token(token.map(str::to_string)))
}

fn app() -> Router {
    app_with(None)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json<T: DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =========================================================
// Health & auth
// =========================================================

#[tokio::test]
async fn test_health_is_public() {
    let (status, body): (_, Value) = get_json(app_with(Some("secret")), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["repository"], "connected");
}

#[tokio::test]
async fn test_api_requires_token_when_configured() {
    let (status, body): (_, ApiError) = get_json(app_with(Some("secret")), "/api/rigs").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.code, "UNAUTHORIZED");

    let request = Request::builder()
        .uri("/api/rigs")
        .header(header::AUTHORIZATION, "Bearer wrong")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app_with(Some("secret")), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .uri("/api/rigs")
        .header(header::AUTHORIZATION, "Bearer secret")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app_with(Some("secret")), request).await;
    assert_eq!(status, StatusCode::OK);
}

// =========================================================
// Inspections
// =========================================================

#[tokio::test]
async fn test_list_inspections_with_filters() {
    let (status, inspections): (_, Vec<Inspection>) =
        get_json(app(), "/api/inspections?rig=A&period=last-7-days").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = inspections.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["i1"]);
}

#[tokio::test]
async fn test_list_inspections_empty_params_are_unset() {
    let (status, inspections): (_, Vec<Inspection>) =
        get_json(app(), "/api/inspections?rig=&status=all&startDate=&q=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inspections.len(), 4);
}

#[tokio::test]
async fn test_list_inspections_keyword_search() {
    let (_, inspections): (_, Vec<Inspection>) =
        get_json(app(), "/api/inspections?q=URGENT").await;
    assert_eq!(inspections.len(), 1);
    assert_eq!(inspections[0].id.as_str(), "i1");
}

#[tokio::test]
async fn test_malformed_date_is_bad_request() {
    let (status, body): (_, ApiError) =
        get_json(app(), "/api/inspections?startDate=yesterday&endDate=2024-01-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, "BAD_REQUEST");
}

#[tokio::test]
async fn test_inspection_crud_round() {
    let app = app();

    let request = json_request(
        Method::POST,
        "/api/inspections",
        json!({"title": "Derrick survey", "priority": "High", "status": "pending", "rig": "B"}),
    );
    let (status, body) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Inspection = serde_json::from_slice(&body).unwrap();
    assert!(created.created_at.is_some());

    let uri = format!("/api/inspections/{}", created.id);
    let request = json_request(
        Method::PUT,
        &uri,
        json!({"title": "Derrick survey", "priority": "High", "status": "completed", "rig": "B"}),
    );
    let (status, body) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::OK);
    let updated: Inspection = serde_json::from_slice(&body).unwrap();
    assert_eq!(updated.status.as_str(), "completed");
    assert_eq!(updated.created_at, created.created_at);

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body): (_, ApiError) = get_json(app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.code, "NOT_FOUND");
}

#[tokio::test]
async fn test_invalid_draft_is_bad_request() {
    let request = json_request(Method::POST, "/api/inspections", json!({"title": "   "}));
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ApiError = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.code, "VALIDATION_ERROR");
}

// =========================================================
// Rigs & inspectors
// =========================================================

#[tokio::test]
async fn test_duplicate_rig_is_conflict() {
    let request = json_request(Method::POST, "/api/rigs", json!({"name": "A"}));
    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_rig_rename_cascades_over_http() {
    let app = app();
    let request = json_request(
        Method::PUT,
        "/api/rigs/rig-a",
        json!({"name": "Alpha", "location": "North Sea"}),
    );
    let (status, body) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::OK);
    let rig: Rig = serde_json::from_slice(&body).unwrap();
    assert_eq!(rig.name, "Alpha");

    let (_, inspections): (_, Vec<Inspection>) =
        get_json(app, "/api/inspections?rig=Alpha").await;
    assert_eq!(inspections.len(), 2);
}

#[tokio::test]
async fn test_inspector_endpoints() {
    let app = app();
    let (status, inspectors): (_, Value) = get_json(app.clone(), "/api/inspectors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inspectors.as_array().map(|a| a.len()), Some(2));

    let request = json_request(
        Method::POST,
        "/api/inspectors",
        json!({"name": "Maria", "specialties": ["Mechanical"]}),
    );
    let (status, _) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _): (_, Value) = get_json(app, "/api/inspectors/nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =========================================================
// Reports
// =========================================================

#[tokio::test]
async fn test_full_report() {
    let (status, report): (_, ReportData) =
        get_json(app(), "/api/reports?monthOrder=calendar").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report.summary.total, 4);
    assert_eq!(report.severity.len(), 4);
    assert_eq!(report.statuses.total(), 4);
    assert_eq!(report.rig_performance.len(), 3);
}

#[tokio::test]
async fn test_bad_month_order_is_bad_request() {
    let (status, _): (_, ApiError) = get_json(app(), "/api/reports?monthOrder=random").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rig_report_lists_idle_rigs() {
    let (status, rigs): (_, Vec<RigPerformance>) =
        get_json(app(), "/api/reports/rigs?rig=B").await;
    assert_eq!(status, StatusCode::OK);
    let rows: Vec<(&str, usize, u32)> = rigs
        .iter()
        .map(|r| (r.rig.as_str(), r.inspections, r.compliance))
        .collect();
    assert_eq!(rows, vec![("A", 0, 0), ("B", 1, 0)]);
}

#[tokio::test]
async fn test_severity_and_monthly_reports() {
    let (status, body): (_, Value) = get_json(app(), "/api/reports/severity?rig=A").await;
    assert_eq!(status, StatusCode::OK);
    let labels: Vec<&str> = body["severity"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["severity"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Urgent", "High", "Medium", "Low"]);
    assert_eq!(body["statuses"]["completed"], 1);
    assert_eq!(body["statuses"]["fail"], 1);

    let (status, monthly): (_, Value) = get_json(app(), "/api/reports/monthly").await;
    assert_eq!(status, StatusCode::OK);
    let total: u64 = monthly
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["total"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 4);
}
