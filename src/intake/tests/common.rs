use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::dto::{
    AboutProfileDto, CompanyProfileDto, CredentialsDto, JobApplicationSubmitDto, JobPostingDto,
    ProjectDto, PublicationDto, RegistrationDto,
};
use crate::forms::{JobApplicationForm, JobPostingForm, LoginForm, RegisterForm, ResumeRef};
use crate::intake::{BackendGateway, GatewayError, IntakeService};

pub(super) fn application() -> JobApplicationForm {
    JobApplicationForm {
        first_name: "Maya".to_string(),
        last_name: "Torres".to_string(),
        email: "maya.torres@example.com".to_string(),
        phone: "+1 555 0101".to_string(),
        linkedin_url: Some("https://www.linkedin.com/in/maya-torres".to_string()),
        portfolio_url: None,
        experience_level: "Senior".to_string(),
        education_level: "Bachelor's degree".to_string(),
        availability: "Two weeks".to_string(),
        salary_expectation: "$100k-$130k".to_string(),
        skills: "Rust, distributed systems, observability tooling, and incident response."
            .to_string(),
        cover_letter: "I have spent six years building ingestion pipelines and would love to \
                       bring that experience to your platform team."
            .to_string(),
        relocate: true,
        terms_accepted: true,
        resume: Some(ResumeRef {
            file_name: "maya-torres.pdf".to_string(),
            storage_key: "uploads/resumes/maya-torres.pdf".to_string(),
        }),
    }
}

pub(super) fn posting() -> JobPostingForm {
    JobPostingForm {
        title: "Backend Engineer".to_string(),
        description: "Own the ingestion services and their on-call rotation.".to_string(),
        job_type: 0,
        salary_min: 95_000,
        salary_max: 130_000,
        location: "Seattle".to_string(),
    }
}

pub(super) fn register() -> RegisterForm {
    RegisterForm {
        username: "noa.lindberg".to_string(),
        email: "noa@example.com".to_string(),
        password: "abc123".to_string(),
        confirm_password: "abc123".to_string(),
        terms_accepted: true,
    }
}

pub(super) fn login() -> LoginForm {
    LoginForm {
        identifier: "noa@example.com".to_string(),
        password: "abc123".to_string(),
    }
}

/// What a gateway implementation saw, for assertions.
#[derive(Debug, Clone)]
pub(super) enum Relayed {
    Application(JobApplicationSubmitDto),
    Company(CompanyProfileDto),
    Job(JobPostingDto),
    About(AboutProfileDto),
    Registration(RegistrationDto),
    Login(CredentialsDto),
    Project(ProjectDto),
    Publication(PublicationDto),
}

#[derive(Default)]
pub(super) struct MemoryGateway {
    events: Mutex<Vec<Relayed>>,
}

impl MemoryGateway {
    pub(super) fn events(&self) -> Vec<Relayed> {
        self.events.lock().expect("gateway mutex poisoned").clone()
    }

    fn record(&self, event: Relayed) -> Result<(), GatewayError> {
        self.events
            .lock()
            .expect("gateway mutex poisoned")
            .push(event);
        Ok(())
    }
}

impl BackendGateway for MemoryGateway {
    fn submit_application(&self, dto: JobApplicationSubmitDto) -> Result<(), GatewayError> {
        self.record(Relayed::Application(dto))
    }

    fn publish_company_profile(&self, dto: CompanyProfileDto) -> Result<(), GatewayError> {
        self.record(Relayed::Company(dto))
    }

    fn publish_job(&self, dto: JobPostingDto) -> Result<(), GatewayError> {
        self.record(Relayed::Job(dto))
    }

    fn save_about_profile(&self, dto: AboutProfileDto) -> Result<(), GatewayError> {
        self.record(Relayed::About(dto))
    }

    fn register_user(&self, dto: RegistrationDto) -> Result<(), GatewayError> {
        self.record(Relayed::Registration(dto))
    }

    fn authenticate(&self, dto: CredentialsDto) -> Result<(), GatewayError> {
        self.record(Relayed::Login(dto))
    }

    fn save_project(&self, dto: ProjectDto) -> Result<(), GatewayError> {
        self.record(Relayed::Project(dto))
    }

    fn save_publication(&self, dto: PublicationDto) -> Result<(), GatewayError> {
        self.record(Relayed::Publication(dto))
    }
}

/// Gateway that reports every record as a duplicate.
pub(super) struct ConflictGateway;

impl BackendGateway for ConflictGateway {
    fn submit_application(&self, _dto: JobApplicationSubmitDto) -> Result<(), GatewayError> {
        Err(GatewayError::Conflict)
    }

    fn publish_company_profile(&self, _dto: CompanyProfileDto) -> Result<(), GatewayError> {
        Err(GatewayError::Conflict)
    }

    fn publish_job(&self, _dto: JobPostingDto) -> Result<(), GatewayError> {
        Err(GatewayError::Conflict)
    }

    fn save_about_profile(&self, _dto: AboutProfileDto) -> Result<(), GatewayError> {
        Err(GatewayError::Conflict)
    }

    fn register_user(&self, _dto: RegistrationDto) -> Result<(), GatewayError> {
        Err(GatewayError::Conflict)
    }

    fn authenticate(&self, _dto: CredentialsDto) -> Result<(), GatewayError> {
        Err(GatewayError::Rejected("unknown account".to_string()))
    }

    fn save_project(&self, _dto: ProjectDto) -> Result<(), GatewayError> {
        Err(GatewayError::Conflict)
    }

    fn save_publication(&self, _dto: PublicationDto) -> Result<(), GatewayError> {
        Err(GatewayError::Conflict)
    }
}

pub(super) fn build_service() -> (Arc<IntakeService<MemoryGateway>>, Arc<MemoryGateway>) {
    let gateway = Arc::new(MemoryGateway::default());
    let service = Arc::new(IntakeService::new(gateway.clone()));
    (service, gateway)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
