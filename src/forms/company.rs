use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::field::{absolute_url, collect, trimmed, violation};
use crate::jobs::JobKind;

/// Raw company profile payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CompanyProfileForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 2,
        code = "too_short",
        message = "company name needs at least 2 characters"
    ))]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 10,
        code = "too_short",
        message = "the introduction needs at least 10 characters"
    ))]
    pub introduction: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, code = "too_short", message = "website is required"),
        custom(function = absolute_url)
    )]
    pub website: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 2,
        code = "too_short",
        message = "industry needs at least 2 characters"
    ))]
    pub industry: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 2,
        code = "too_short",
        message = "area needs at least 2 characters"
    ))]
    pub area: String,
    pub founded_on: NaiveDate,
}

/// Validated company profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub introduction: String,
    pub website: String,
    pub industry: String,
    pub area: String,
    pub founded_on: NaiveDate,
}

impl CompanyProfileForm {
    pub fn validate_profile(&self) -> Result<CompanyProfile, ValidationErrors> {
        let errors = collect(self.validate());
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CompanyProfile {
            name: self.name.clone(),
            introduction: self.introduction.clone(),
            website: self.website.clone(),
            industry: self.industry.clone(),
            area: self.area.clone(),
            founded_on: self.founded_on,
        })
    }
}

/// Raw job posting payload. The employment type arrives as the integer code
/// used throughout the company-side forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct JobPostingForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 2,
        code = "too_short",
        message = "title needs at least 2 characters"
    ))]
    pub title: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 10,
        code = "too_short",
        message = "the description needs at least 10 characters"
    ))]
    pub description: String,
    pub job_type: i64,
    #[validate(range(min = 0, code = "out_of_range", message = "salary must not be negative"))]
    pub salary_min: i64,
    #[validate(range(min = 0, code = "out_of_range", message = "salary must not be negative"))]
    pub salary_max: i64,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 2,
        code = "too_short",
        message = "location needs at least 2 characters"
    ))]
    pub location: String,
}

/// Validated job posting record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    pub kind: JobKind,
    pub salary_min: u32,
    pub salary_max: u32,
    pub location: String,
}

impl JobPostingForm {
    pub fn validate_posting(&self) -> Result<JobPosting, ValidationErrors> {
        let mut errors = collect(self.validate());

        let kind = JobKind::from_code(self.job_type);
        if kind.is_none() {
            errors.add(
                "job_type",
                violation("invalid_choice", "job type code must be between 0 and 4"),
            );
        }

        let salary_min = u32::try_from(self.salary_min).ok();
        if self.salary_min >= 0 && salary_min.is_none() {
            errors.add(
                "salary_min",
                violation("out_of_range", "salary is too large"),
            );
        }
        let salary_max = u32::try_from(self.salary_max).ok();
        if self.salary_max >= 0 && salary_max.is_none() {
            errors.add(
                "salary_max",
                violation("out_of_range", "salary is too large"),
            );
        }

        // The cross-field check only runs once both bounds pass their own rules.
        if let (Some(min), Some(max)) = (salary_min, salary_max) {
            if max < min {
                errors.add(
                    "salary_max",
                    violation(
                        "out_of_range",
                        "maximum salary must not be below the minimum",
                    ),
                );
            }
        }

        match (kind, salary_min, salary_max) {
            (Some(kind), Some(salary_min), Some(salary_max)) if errors.is_empty() => {
                Ok(JobPosting {
                    title: self.title.clone(),
                    description: self.description.clone(),
                    kind,
                    salary_min,
                    salary_max,
                    location: self.location.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}
