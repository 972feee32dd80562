use std::io::Read;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::backend::{BackendGateway, GatewayError};
use crate::dto::{
    AboutProfileDto, CompanyProfileDto, CredentialsDto, JobApplicationSubmitDto, JobPostingDto,
    ProjectDto, PublicationDto, RegistrationDto,
};
use crate::forms::{
    AboutProfileForm, ApplicationOptions, CompanyProfileForm, JobApplicationForm, JobPostingForm,
    LoginForm, ProjectForm, PublicationForm, RegisterForm, ValidationReport,
};
use crate::imports::{JobPostingImporter, PostingImportError, RowFailure};

/// Identifier wrapper for relayed submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// What kind of form a receipt acknowledges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Application,
    CompanyProfile,
    JobPosting,
    AboutProfile,
    Registration,
    Project,
    Publication,
}

impl SubmissionKind {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionKind::Application => "application",
            SubmissionKind::CompanyProfile => "company_profile",
            SubmissionKind::JobPosting => "job_posting",
            SubmissionKind::AboutProfile => "about_profile",
            SubmissionKind::Registration => "registration",
            SubmissionKind::Project => "project",
            SubmissionKind::Publication => "publication",
        }
    }
}

/// Acknowledgement returned once a submission has been relayed.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub submission_id: SubmissionId,
    pub kind: SubmissionKind,
}

/// Summary of a bulk posting import.
#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub accepted: usize,
    pub failures: Vec<RowFailure>,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("sub-{id:06}"))
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("submission failed validation")]
    Invalid(ValidationReport),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Import(#[from] PostingImportError),
}

/// Service composing the form schemas and the backend gateway: validate,
/// convert to the wire shape, relay, acknowledge.
pub struct IntakeService<B> {
    gateway: Arc<B>,
    options: ApplicationOptions,
}

impl<B> IntakeService<B>
where
    B: BackendGateway + 'static,
{
    pub fn new(gateway: Arc<B>) -> Self {
        Self::with_options(gateway, ApplicationOptions::standard())
    }

    pub fn with_options(gateway: Arc<B>, options: ApplicationOptions) -> Self {
        Self { gateway, options }
    }

    pub fn options(&self) -> &ApplicationOptions {
        &self.options
    }

    pub fn submit_application(
        &self,
        job_id: i64,
        form: JobApplicationForm,
    ) -> Result<SubmissionReceipt, IntakeError> {
        let record = form
            .validate_submission(&self.options)
            .map_err(|errors| IntakeError::Invalid(errors.into()))?;
        let dto = JobApplicationSubmitDto::from_record(job_id, &record);
        self.gateway.submit_application(dto)?;
        Ok(receipt(SubmissionKind::Application))
    }

    pub fn publish_company_profile(
        &self,
        form: CompanyProfileForm,
    ) -> Result<SubmissionReceipt, IntakeError> {
        let record = form
            .validate_profile()
            .map_err(|errors| IntakeError::Invalid(errors.into()))?;
        self.gateway
            .publish_company_profile(CompanyProfileDto::from_record(&record))?;
        Ok(receipt(SubmissionKind::CompanyProfile))
    }

    pub fn publish_job_posting(
        &self,
        form: JobPostingForm,
    ) -> Result<SubmissionReceipt, IntakeError> {
        let record = form
            .validate_posting()
            .map_err(|errors| IntakeError::Invalid(errors.into()))?;
        self.gateway.publish_job(JobPostingDto::from_record(&record))?;
        Ok(receipt(SubmissionKind::JobPosting))
    }

    pub fn save_about_profile(
        &self,
        form: AboutProfileForm,
    ) -> Result<SubmissionReceipt, IntakeError> {
        let record = form
            .validate_profile()
            .map_err(|errors| IntakeError::Invalid(errors.into()))?;
        self.gateway
            .save_about_profile(AboutProfileDto::from_record(&record))?;
        Ok(receipt(SubmissionKind::AboutProfile))
    }

    pub fn register(&self, form: RegisterForm) -> Result<SubmissionReceipt, IntakeError> {
        let record = form
            .validate_registration()
            .map_err(|errors| IntakeError::Invalid(errors.into()))?;
        self.gateway
            .register_user(RegistrationDto::from_record(&record))?;
        Ok(receipt(SubmissionKind::Registration))
    }

    pub fn login(&self, form: LoginForm) -> Result<(), IntakeError> {
        let record = form
            .validate_login()
            .map_err(|errors| IntakeError::Invalid(errors.into()))?;
        self.gateway
            .authenticate(CredentialsDto::from_record(&record))?;
        Ok(())
    }

    pub fn save_project(&self, form: ProjectForm) -> Result<SubmissionReceipt, IntakeError> {
        let record = form
            .validate_project()
            .map_err(|errors| IntakeError::Invalid(errors.into()))?;
        self.gateway.save_project(ProjectDto::from_record(&record))?;
        Ok(receipt(SubmissionKind::Project))
    }

    pub fn save_publication(
        &self,
        form: PublicationForm,
    ) -> Result<SubmissionReceipt, IntakeError> {
        let record = form
            .validate_publication()
            .map_err(|errors| IntakeError::Invalid(errors.into()))?;
        self.gateway
            .save_publication(PublicationDto::from_record(&record))?;
        Ok(receipt(SubmissionKind::Publication))
    }

    /// Import a CSV export of postings, relaying every valid row.
    pub fn import_job_postings<R: Read>(&self, reader: R) -> Result<ImportSummary, IntakeError> {
        let outcome = JobPostingImporter::from_reader(reader)?;

        let mut accepted = 0;
        for posting in &outcome.postings {
            self.gateway.publish_job(JobPostingDto::from_record(posting))?;
            accepted += 1;
        }

        Ok(ImportSummary {
            accepted,
            failures: outcome.failures,
        })
    }
}

fn receipt(kind: SubmissionKind) -> SubmissionReceipt {
    SubmissionReceipt {
        submission_id: next_submission_id(),
        kind,
    }
}
