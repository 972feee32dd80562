use crate::dto::{
    AboutProfileDto, CompanyProfileDto, CredentialsDto, JobApplicationSubmitDto, JobPostingDto,
    ProjectDto, PublicationDto, RegistrationDto,
};
use tracing::info;

/// Transport seam to the hiring backend. Implementations receive validated
/// wire DTOs; retry and batching concerns live on the other side of this
/// trait.
pub trait BackendGateway: Send + Sync {
    fn submit_application(&self, dto: JobApplicationSubmitDto) -> Result<(), GatewayError>;
    fn publish_company_profile(&self, dto: CompanyProfileDto) -> Result<(), GatewayError>;
    fn publish_job(&self, dto: JobPostingDto) -> Result<(), GatewayError>;
    fn save_about_profile(&self, dto: AboutProfileDto) -> Result<(), GatewayError>;
    fn register_user(&self, dto: RegistrationDto) -> Result<(), GatewayError>;
    fn authenticate(&self, dto: CredentialsDto) -> Result<(), GatewayError>;
    fn save_project(&self, dto: ProjectDto) -> Result<(), GatewayError>;
    fn save_publication(&self, dto: PublicationDto) -> Result<(), GatewayError>;
}

/// Error enumeration for gateway failures.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("backend rejected the submission: {0}")]
    Rejected(String),
    #[error("record already exists")]
    Conflict,
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Development gateway that records submissions instead of relaying them.
#[derive(Debug, Default)]
pub struct LoggingGateway;

impl BackendGateway for LoggingGateway {
    fn submit_application(&self, dto: JobApplicationSubmitDto) -> Result<(), GatewayError> {
        info!(job_id = dto.job_id, email = %dto.email, "accepted job application");
        Ok(())
    }

    fn publish_company_profile(&self, dto: CompanyProfileDto) -> Result<(), GatewayError> {
        info!(name = %dto.name, "accepted company profile");
        Ok(())
    }

    fn publish_job(&self, dto: JobPostingDto) -> Result<(), GatewayError> {
        info!(title = %dto.title, job_type = dto.job_type, "accepted job posting");
        Ok(())
    }

    fn save_about_profile(&self, dto: AboutProfileDto) -> Result<(), GatewayError> {
        info!(first_name = %dto.first_name, "accepted about profile");
        Ok(())
    }

    fn register_user(&self, dto: RegistrationDto) -> Result<(), GatewayError> {
        info!(username = %dto.username, "accepted registration");
        Ok(())
    }

    fn authenticate(&self, dto: CredentialsDto) -> Result<(), GatewayError> {
        info!(identifier = %dto.identifier, "accepted login");
        Ok(())
    }

    fn save_project(&self, dto: ProjectDto) -> Result<(), GatewayError> {
        info!(name = %dto.name, "accepted project");
        Ok(())
    }

    fn save_publication(&self, dto: PublicationDto) -> Result<(), GatewayError> {
        info!(title = %dto.title, "accepted publication");
        Ok(())
    }
}
