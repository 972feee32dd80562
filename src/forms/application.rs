use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::field::{absolute_url, accepted, collect, empty_string_as_none, selection, trimmed};

/// Raw job application payload as submitted by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct JobApplicationForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, code = "too_short", message = "first name is required"))]
    pub first_name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, code = "too_short", message = "last name is required"))]
    pub last_name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(email(code = "invalid_email", message = "email address is not valid"))]
    pub email: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, code = "too_short", message = "phone number is required"))]
    pub phone: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(custom(function = absolute_url))]
    pub linkedin_url: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(custom(function = absolute_url))]
    pub portfolio_url: Option<String>,
    #[serde(default, deserialize_with = "trimmed")]
    pub experience_level: String,
    #[serde(default, deserialize_with = "trimmed")]
    pub education_level: String,
    #[serde(default, deserialize_with = "trimmed")]
    pub availability: String,
    #[serde(default, deserialize_with = "trimmed")]
    pub salary_expectation: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 50,
        code = "too_short",
        message = "describe your skills in at least 50 characters"
    ))]
    pub skills: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 50,
        code = "too_short",
        message = "the cover letter needs at least 50 characters"
    ))]
    pub cover_letter: String,
    #[serde(default)]
    pub relocate: bool,
    #[validate(custom(function = accepted))]
    pub terms_accepted: bool,
    #[serde(default)]
    pub resume: Option<ResumeRef>,
}

/// Reference to an uploaded resume. Content checks happen elsewhere; intake
/// only carries the pointer through to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRef {
    pub file_name: String,
    pub storage_key: String,
}

/// Option sets for the categorical application fields. The board operator
/// supplies these; the schema only enforces membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationOptions {
    pub experience_levels: Vec<String>,
    pub education_levels: Vec<String>,
    pub availabilities: Vec<String>,
    pub salary_bands: Vec<String>,
}

impl ApplicationOptions {
    /// The default option sets shipped with the board.
    pub fn standard() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|value| value.to_string()).collect()
        }

        Self {
            experience_levels: owned(&["Entry level", "Junior", "Mid level", "Senior", "Lead"]),
            education_levels: owned(&[
                "High school",
                "Associate degree",
                "Bachelor's degree",
                "Master's degree",
                "Doctorate",
            ]),
            availabilities: owned(&["Immediately", "Two weeks", "One month", "Three months"]),
            salary_bands: owned(&[
                "$40k-$60k",
                "$60k-$80k",
                "$80k-$100k",
                "$100k-$130k",
                "$130k+",
            ]),
        }
    }
}

/// Validated job application record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub experience_level: String,
    pub education_level: String,
    pub availability: String,
    pub salary_expectation: String,
    pub skills: String,
    pub cover_letter: String,
    pub relocate: bool,
    pub terms_accepted: bool,
    pub resume: Option<ResumeRef>,
}

impl JobApplicationForm {
    /// Validate every field against `options`, aggregating all problems.
    pub fn validate_submission(
        &self,
        options: &ApplicationOptions,
    ) -> Result<JobApplication, ValidationErrors> {
        let mut errors = collect(self.validate());

        selection(
            &mut errors,
            "experience_level",
            &self.experience_level,
            &options.experience_levels,
        );
        selection(
            &mut errors,
            "education_level",
            &self.education_level,
            &options.education_levels,
        );
        selection(
            &mut errors,
            "availability",
            &self.availability,
            &options.availabilities,
        );
        selection(
            &mut errors,
            "salary_expectation",
            &self.salary_expectation,
            &options.salary_bands,
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(JobApplication {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            linkedin_url: self.linkedin_url.clone(),
            portfolio_url: self.portfolio_url.clone(),
            experience_level: self.experience_level.clone(),
            education_level: self.education_level.clone(),
            availability: self.availability.clone(),
            salary_expectation: self.salary_expectation.clone(),
            skills: self.skills.clone(),
            cover_letter: self.cover_letter.clone(),
            relocate: self.relocate,
            terms_accepted: self.terms_accepted,
            resume: self.resume.clone(),
        })
    }
}
