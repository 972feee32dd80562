use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use careerdesk::config::AppConfig;
use careerdesk::error::AppError;
use careerdesk::forms::{
    AboutProfileForm, ApplicationOptions, CompanyProfileForm, JobApplicationForm, JobPostingForm,
    LoginForm, ProjectForm, PublicationForm, RegisterForm, ValidationReport,
};
use careerdesk::intake::{intake_router, IntakeService, LoggingGateway};
use careerdesk::telemetry;
use clap::{Args, Parser, Subcommand, ValueEnum};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Careerdesk Intake",
    about = "Validate and relay job-board intake forms from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate a JSON form payload from a file and print every problem
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Which form schema to validate against
    #[arg(long, value_enum)]
    form: FormKind,
    /// Path to the JSON payload
    #[arg(long)]
    file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormKind {
    Application,
    Company,
    Job,
    About,
    Register,
    Login,
    Project,
    Publication,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Check(args) => run_check(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let service = Arc::new(IntakeService::new(Arc::new(LoggingGateway)));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(intake_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, backend = %config.backend.api_origin, "intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let payload = std::fs::read_to_string(&args.file)?;
    let report = check_payload(args.form, &payload)?;
    render_check_report(&report);
    Ok(())
}

fn check_payload(kind: FormKind, payload: &str) -> Result<ValidationReport, AppError> {
    fn report<T>(outcome: Result<T, validator::ValidationErrors>) -> ValidationReport {
        match outcome {
            Ok(_) => ValidationReport::default(),
            Err(errors) => errors.into(),
        }
    }

    let report = match kind {
        FormKind::Application => {
            let form: JobApplicationForm = serde_json::from_str(payload)?;
            report(form.validate_submission(&ApplicationOptions::standard()))
        }
        FormKind::Company => {
            let form: CompanyProfileForm = serde_json::from_str(payload)?;
            report(form.validate_profile())
        }
        FormKind::Job => {
            let form: JobPostingForm = serde_json::from_str(payload)?;
            report(form.validate_posting())
        }
        FormKind::About => {
            let form: AboutProfileForm = serde_json::from_str(payload)?;
            report(form.validate_profile())
        }
        FormKind::Register => {
            let form: RegisterForm = serde_json::from_str(payload)?;
            report(form.validate_registration())
        }
        FormKind::Login => {
            let form: LoginForm = serde_json::from_str(payload)?;
            report(form.validate_login())
        }
        FormKind::Project => {
            let form: ProjectForm = serde_json::from_str(payload)?;
            report(form.validate_project())
        }
        FormKind::Publication => {
            let form: PublicationForm = serde_json::from_str(payload)?;
            report(form.validate_publication())
        }
    };

    Ok(report)
}

fn render_check_report(report: &ValidationReport) {
    if report.is_empty() {
        println!("Form is valid.");
        return;
    }

    println!("Found {} problem(s)", report.len());
    for error in &report.errors {
        println!("- {}: {} ({})", error.field, error.message, error.reason);
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
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

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
