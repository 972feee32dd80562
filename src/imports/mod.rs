//! Bulk job-posting import from a hiring-team CSV export.
//!
//! Every row runs through the same posting schema as the interactive form.
//! A bad row is reported with its line number and field errors; it never
//! aborts the rest of the file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use validator::ValidationErrors;

use crate::forms::field::violation;
use crate::forms::{JobPosting, JobPostingForm, ValidationReport};
use crate::jobs::JobTypeLabel;

#[derive(Debug, thiserror::Error)]
pub enum PostingImportError {
    #[error("failed to read posting export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid posting CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// One rejected row, identified by its line in the export.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RowFailure {
    pub line: usize,
    pub errors: ValidationReport,
}

/// Result of an import pass: validated postings plus per-row failures.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub postings: Vec<JobPosting>,
    pub failures: Vec<RowFailure>,
}

#[derive(Debug, Deserialize)]
struct PostingRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Job Type")]
    job_type: String,
    #[serde(rename = "Salary Min", default)]
    salary_min: String,
    #[serde(rename = "Salary Max", default)]
    salary_max: String,
    #[serde(rename = "Location")]
    location: String,
}

pub struct JobPostingImporter;

impl JobPostingImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ImportOutcome, PostingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ImportOutcome, PostingImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut outcome = ImportOutcome::default();

        for (index, record) in csv_reader.deserialize::<PostingRow>().enumerate() {
            // Header occupies line 1; data rows start at 2.
            let line = index + 2;
            let row = record?;

            match validate_row(row) {
                Ok(posting) => outcome.postings.push(posting),
                Err(errors) => outcome.failures.push(RowFailure {
                    line,
                    errors: ValidationReport::from(errors),
                }),
            }
        }

        Ok(outcome)
    }
}

fn validate_row(row: PostingRow) -> Result<JobPosting, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    // The export writes the employment type as either the integer code or a
    // label; both funnel through the taxonomy bridge.
    let job_type = decode_job_type(&row.job_type);
    if job_type.is_none() {
        errors.add(
            "job_type",
            violation("invalid_choice", "unrecognized job type"),
        );
    }

    let salary_min = decode_salary(&mut errors, "salary_min", &row.salary_min);
    let salary_max = decode_salary(&mut errors, "salary_max", &row.salary_max);

    let (Some(job_type), Some(salary_min), Some(salary_max)) = (job_type, salary_min, salary_max)
    else {
        return Err(errors);
    };

    let form = JobPostingForm {
        title: row.title,
        description: row.description,
        job_type,
        salary_min,
        salary_max,
        location: row.location,
    };

    form.validate_posting()
}

fn decode_job_type(cell: &str) -> Option<i64> {
    let trimmed = cell.trim();
    if let Ok(code) = trimmed.parse::<i64>() {
        return Some(code);
    }

    JobTypeLabel::parse(trimmed)
        .kind()
        .map(|kind| kind.code() as i64)
}

fn decode_salary(
    errors: &mut ValidationErrors,
    field: &'static str,
    cell: &str,
) -> Option<i64> {
    match cell.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.add(field, violation("not_a_number", "salary must be a number"));
            None
        }
    }
}
