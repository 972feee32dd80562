use std::sync::Arc;

use axum::http::StatusCode;
use tower::ServiceExt;

use super::common::*;
use crate::intake::{intake_router, IntakeService};

fn post_json(uri: &str, body: &impl serde::Serialize) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(body).expect("body serializes"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn application_route_accepts_valid_payloads() {
    let (service, _) = build_service();
    let router = intake_router(service);

    let response = router
        .oneshot(post_json("/api/v1/jobs/42/applications", &application()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("submission_id")
        .and_then(serde_json::Value::as_str)
        .is_some_and(|id| id.starts_with("sub-")));
    assert_eq!(
        payload.get("kind").and_then(serde_json::Value::as_str),
        Some("application")
    );
}

#[tokio::test]
async fn invalid_payload_returns_the_full_error_list() {
    let (service, gateway) = build_service();
    let router = intake_router(service);

    let mut form = application();
    form.first_name = String::new();
    form.terms_accepted = false;

    let response = router
        .oneshot(post_json("/api/v1/jobs/42/applications", &form))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let errors = payload
        .get("errors")
        .and_then(serde_json::Value::as_array)
        .expect("error list present");
    assert_eq!(errors.len(), 2);
    let fields: Vec<&str> = errors
        .iter()
        .filter_map(|entry| entry.get("field").and_then(serde_json::Value::as_str))
        .collect();
    assert_eq!(fields, vec!["first_name", "terms_accepted"]);

    assert!(gateway.events().is_empty());
}

#[tokio::test]
async fn register_route_maps_conflicts_to_409() {
    let service = Arc::new(IntakeService::new(Arc::new(ConflictGateway)));
    let router = intake_router(service);

    let response = router
        .oneshot(post_json("/api/v1/auth/register", &register()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_route_maps_rejection_to_401() {
    let service = Arc::new(IntakeService::new(Arc::new(ConflictGateway)));
    let router = intake_router(service);

    let response = router
        .oneshot(post_json("/api/v1/auth/login", &login()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn areas_route_serves_the_reference_list() {
    let (service, _) = build_service();
    let router = intake_router(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/reference/areas")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let areas = payload
        .get("areas")
        .and_then(serde_json::Value::as_array)
        .expect("areas present");
    assert_eq!(areas.len(), 10);
}

#[tokio::test]
async fn import_route_reports_row_failures() {
    let (service, _) = build_service();
    let router = intake_router(service);

    let csv = "Title,Description,Job Type,Salary Min,Salary Max,Location\n\
               Backend Engineer,Own the ingestion services and on-call.,0,95000,130000,Seattle\n\
               QA,Short.,gig,70000,70000,Boston\n";
    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/jobs/import")
                .header(axum::http::header::CONTENT_TYPE, "text/csv")
                .body(axum::body::Body::from(csv))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("accepted").and_then(serde_json::Value::as_u64),
        Some(1)
    );
    assert_eq!(
        payload
            .get("failures")
            .and_then(serde_json::Value::as_array)
            .map(|failures| failures.len()),
        Some(1)
    );
}
