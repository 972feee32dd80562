//! Wire shapes exchanged with the hiring backend, and their mappings.
//!
//! DTOs keep the backend's conventions: optional text fields travel as empty
//! strings, employment types travel as either the integer code (posting
//! submissions) or the string label (job/application responses). The
//! validated records in [`crate::forms`] use genuine options; the conversions
//! here translate between the two without losing any field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::forms::{
    AboutProfile, CompanyProfile, Credentials, JobApplication, JobPosting, Project, Publication,
    Registration, ResumeRef, Visibility,
};
use crate::jobs::{ApplicationStatus, JobKind, JobTypeLabel};

fn optional_as_wire(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn wire_as_optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Submission body for a job application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplicationSubmitDto {
    pub job_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub portfolio_url: String,
    pub experience_level: String,
    pub education_level: String,
    pub availability: String,
    pub salary_expectation: String,
    pub skills: String,
    pub cover_letter: String,
    pub relocate: bool,
    pub terms_accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeRef>,
}

impl JobApplicationSubmitDto {
    pub fn from_record(job_id: i64, record: &JobApplication) -> Self {
        Self {
            job_id,
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            linkedin_url: optional_as_wire(&record.linkedin_url),
            portfolio_url: optional_as_wire(&record.portfolio_url),
            experience_level: record.experience_level.clone(),
            education_level: record.education_level.clone(),
            availability: record.availability.clone(),
            salary_expectation: record.salary_expectation.clone(),
            skills: record.skills.clone(),
            cover_letter: record.cover_letter.clone(),
            relocate: record.relocate,
            terms_accepted: record.terms_accepted,
            resume: record.resume.clone(),
        }
    }

    pub fn into_record(self) -> JobApplication {
        JobApplication {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            linkedin_url: wire_as_optional(self.linkedin_url),
            portfolio_url: wire_as_optional(self.portfolio_url),
            experience_level: self.experience_level,
            education_level: self.education_level,
            availability: self.availability,
            salary_expectation: self.salary_expectation,
            skills: self.skills,
            cover_letter: self.cover_letter,
            relocate: self.relocate,
            terms_accepted: self.terms_accepted,
            resume: self.resume,
        }
    }
}

/// Submission body for a company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfileDto {
    pub name: String,
    pub introduction: String,
    pub website: String,
    pub industry: String,
    pub area: String,
    pub founded_on: NaiveDate,
}

impl CompanyProfileDto {
    pub fn from_record(record: &CompanyProfile) -> Self {
        Self {
            name: record.name.clone(),
            introduction: record.introduction.clone(),
            website: record.website.clone(),
            industry: record.industry.clone(),
            area: record.area.clone(),
            founded_on: record.founded_on,
        }
    }

    pub fn into_record(self) -> CompanyProfile {
        CompanyProfile {
            name: self.name,
            introduction: self.introduction,
            website: self.website,
            industry: self.industry,
            area: self.area,
            founded_on: self.founded_on,
        }
    }
}

/// Submission body for a job posting. The employment type is the integer
/// code; the label encoding never appears in this direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostingDto {
    pub title: String,
    pub description: String,
    pub job_type: u8,
    pub salary_min: u32,
    pub salary_max: u32,
    pub location: String,
}

impl JobPostingDto {
    pub fn from_record(record: &JobPosting) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            job_type: record.kind.code(),
            salary_min: record.salary_min,
            salary_max: record.salary_max,
            location: record.location.clone(),
        }
    }

    /// Recover the validated record. `None` only for codes no [`JobKind`]
    /// covers, which a record-produced DTO never carries.
    pub fn into_record(self) -> Option<JobPosting> {
        let kind = JobKind::from_code(self.job_type as i64)?;
        Some(JobPosting {
            title: self.title,
            description: self.description,
            kind,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            location: self.location,
        })
    }
}

/// Submission body for the member "about" profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutProfileDto {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    pub area: String,
    pub visibility: Visibility,
    pub intro: String,
    pub contact_number: String,
}

impl AboutProfileDto {
    pub fn from_record(record: &AboutProfile) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            age: record.age,
            email: optional_as_wire(&record.email),
            area: optional_as_wire(&record.area),
            visibility: record.visibility,
            intro: optional_as_wire(&record.intro),
            contact_number: optional_as_wire(&record.contact_number),
        }
    }

    pub fn into_record(self) -> AboutProfile {
        AboutProfile {
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            email: wire_as_optional(self.email),
            area: wire_as_optional(self.area),
            visibility: self.visibility,
            intro: wire_as_optional(self.intro),
            contact_number: wire_as_optional(self.contact_number),
        }
    }
}

/// Registration body. The confirmation password and terms flag stay in the
/// intake layer; the backend receives only the account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDto {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegistrationDto {
    pub fn from_record(record: &Registration) -> Self {
        Self {
            username: record.username.clone(),
            email: record.email.clone(),
            password: record.password.clone(),
        }
    }
}

/// Login body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsDto {
    pub identifier: String,
    pub password: String,
}

impl CredentialsDto {
    pub fn from_record(record: &Credentials) -> Self {
        Self {
            identifier: record.identifier.clone(),
            password: record.password.clone(),
        }
    }
}

/// Submission body for a portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: i64,
    pub owner_id: Option<i64>,
    pub name: String,
    pub year: i32,
    pub description: String,
    pub url: String,
    pub tags: Vec<String>,
}

impl ProjectDto {
    pub fn from_record(record: &Project) -> Self {
        Self {
            id: record.id,
            owner_id: record.owner_id,
            name: record.name.clone(),
            year: record.year,
            description: optional_as_wire(&record.description),
            url: optional_as_wire(&record.url),
            tags: record.tags.clone().unwrap_or_default(),
        }
    }

    pub fn into_record(self) -> Project {
        Project {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            year: self.year,
            description: wire_as_optional(self.description),
            url: wire_as_optional(self.url),
            tags: if self.tags.is_empty() {
                None
            } else {
                Some(self.tags)
            },
        }
    }
}

/// Submission body for a publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationDto {
    pub id: i64,
    pub owner_id: Option<i64>,
    pub title: String,
    pub publisher: String,
    pub year: i32,
    pub url: String,
    pub description: String,
}

impl PublicationDto {
    pub fn from_record(record: &Publication) -> Self {
        Self {
            id: record.id,
            owner_id: record.owner_id,
            title: record.title.clone(),
            publisher: record.publisher.clone(),
            year: record.year,
            url: optional_as_wire(&record.url),
            description: record.description.clone(),
        }
    }

    pub fn into_record(self) -> Publication {
        Publication {
            id: self.id,
            owner_id: self.owner_id,
            title: self.title,
            publisher: self.publisher,
            year: self.year,
            url: wire_as_optional(self.url),
            description: self.description,
        }
    }
}

/// Job listing as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDto {
    pub id: i64,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub job_type: String,
    pub salary_min: u32,
    pub salary_max: u32,
    pub posted_on: NaiveDate,
    pub description: String,
}

/// Application summary as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplicationResponseDto {
    pub id: i64,
    pub job_id: i64,
    pub job_title: String,
    pub company_name: String,
    pub status: String,
    pub applied_on: NaiveDate,
}

/// Display model for a job listing row.
#[derive(Debug, Clone, Serialize)]
pub struct JobListItem {
    pub id: i64,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub job_type: JobTypeLabel,
    pub job_type_label: &'static str,
    pub salary_min: u32,
    pub salary_max: u32,
    pub posted_on: NaiveDate,
}

impl JobListItem {
    pub fn from_dto(dto: &JobDto) -> Self {
        let job_type = JobTypeLabel::parse(&dto.job_type);
        Self {
            id: dto.id,
            title: dto.title.clone(),
            company_name: dto.company_name.clone(),
            location: dto.location.clone(),
            job_type,
            job_type_label: job_type.display(),
            salary_min: dto.salary_min,
            salary_max: dto.salary_max,
            posted_on: dto.posted_on,
        }
    }
}

/// Display model for an application summary row.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationListItem {
    pub id: i64,
    pub job_id: i64,
    pub job_title: String,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    pub status_label: &'static str,
    pub applied_on: NaiveDate,
}

impl ApplicationListItem {
    pub fn from_dto(dto: &JobApplicationResponseDto) -> Self {
        let status = ApplicationStatus::parse(&dto.status);
        Self {
            id: dto.id,
            job_id: dto.job_id,
            job_title: dto.job_title.clone(),
            company_name: dto.company_name.clone(),
            status,
            status_label: status.map(ApplicationStatus::label).unwrap_or("unknown"),
            applied_on: dto.applied_on,
        }
    }
}

/// Paginated envelope returned by backend list endpoints.
///
/// The backend is the source of truth for the pagination fields; clients
/// read them and never recompute boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    /// Transform the items while carrying every envelope field through
    /// untouched.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}
