use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::backend::{BackendGateway, GatewayError};
use super::service::{IntakeError, IntakeService, SubmissionReceipt};
use crate::forms::{
    AboutProfileForm, CompanyProfileForm, JobApplicationForm, JobPostingForm, LoginForm,
    ProjectForm, PublicationForm, RegisterForm,
};
use crate::reference::AREA_NAMES;

/// Router builder exposing the intake endpoints.
pub fn intake_router<B>(service: Arc<IntakeService<B>>) -> Router
where
    B: BackendGateway + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs/:job_id/applications",
            post(submit_application_handler::<B>),
        )
        .route("/api/v1/companies", post(publish_company_handler::<B>))
        .route("/api/v1/jobs", post(publish_job_handler::<B>))
        .route("/api/v1/jobs/import", post(import_jobs_handler::<B>))
        .route("/api/v1/profile/about", post(save_about_handler::<B>))
        .route("/api/v1/auth/register", post(register_handler::<B>))
        .route("/api/v1/auth/login", post(login_handler::<B>))
        .route("/api/v1/projects", post(save_project_handler::<B>))
        .route("/api/v1/publications", post(save_publication_handler::<B>))
        .route("/api/v1/reference/areas", get(areas_handler))
        .with_state(service)
}

fn receipt_response(result: Result<SubmissionReceipt, IntakeError>) -> Response {
    match result {
        Ok(receipt) => (StatusCode::ACCEPTED, axum::Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: IntakeError) -> Response {
    match error {
        IntakeError::Invalid(report) => {
            let payload = json!({ "errors": report.errors });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        IntakeError::Gateway(GatewayError::Conflict) => {
            let payload = json!({ "error": "record already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        IntakeError::Gateway(GatewayError::Rejected(reason)) => {
            let payload = json!({ "error": reason });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submit_application_handler<B>(
    State(service): State<Arc<IntakeService<B>>>,
    Path(job_id): Path<i64>,
    axum::Json(form): axum::Json<JobApplicationForm>,
) -> Response
where
    B: BackendGateway + 'static,
{
    receipt_response(service.submit_application(job_id, form))
}

pub(crate) async fn publish_company_handler<B>(
    State(service): State<Arc<IntakeService<B>>>,
    axum::Json(form): axum::Json<CompanyProfileForm>,
) -> Response
where
    B: BackendGateway + 'static,
{
    receipt_response(service.publish_company_profile(form))
}

pub(crate) async fn publish_job_handler<B>(
    State(service): State<Arc<IntakeService<B>>>,
    axum::Json(form): axum::Json<JobPostingForm>,
) -> Response
where
    B: BackendGateway + 'static,
{
    receipt_response(service.publish_job_posting(form))
}

pub(crate) async fn import_jobs_handler<B>(
    State(service): State<Arc<IntakeService<B>>>,
    body: String,
) -> Response
where
    B: BackendGateway + 'static,
{
    match service.import_job_postings(body.as_bytes()) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(IntakeError::Import(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn save_about_handler<B>(
    State(service): State<Arc<IntakeService<B>>>,
    axum::Json(form): axum::Json<AboutProfileForm>,
) -> Response
where
    B: BackendGateway + 'static,
{
    receipt_response(service.save_about_profile(form))
}

pub(crate) async fn register_handler<B>(
    State(service): State<Arc<IntakeService<B>>>,
    axum::Json(form): axum::Json<RegisterForm>,
) -> Response
where
    B: BackendGateway + 'static,
{
    receipt_response(service.register(form))
}

pub(crate) async fn login_handler<B>(
    State(service): State<Arc<IntakeService<B>>>,
    axum::Json(form): axum::Json<LoginForm>,
) -> Response
where
    B: BackendGateway + 'static,
{
    match service.login(form) {
        Ok(()) => {
            let payload = json!({ "status": "authenticated" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(IntakeError::Gateway(GatewayError::Rejected(_))) => {
            let payload = json!({ "error": "invalid credentials" });
            (StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn save_project_handler<B>(
    State(service): State<Arc<IntakeService<B>>>,
    axum::Json(form): axum::Json<ProjectForm>,
) -> Response
where
    B: BackendGateway + 'static,
{
    receipt_response(service.save_project(form))
}

pub(crate) async fn save_publication_handler<B>(
    State(service): State<Arc<IntakeService<B>>>,
    axum::Json(form): axum::Json<PublicationForm>,
) -> Response
where
    B: BackendGateway + 'static,
{
    receipt_response(service.save_publication(form))
}

pub(crate) async fn areas_handler() -> Response {
    let payload = json!({ "areas": AREA_NAMES });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
