use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::field::{absolute_url, collect, current_year, empty_string_as_none, trimmed, year_range};

/// Raw project entry payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProjectForm {
    pub id: i64,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, code = "too_short", message = "project name is required"))]
    pub name: String,
    pub year: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(custom(function = absolute_url))]
    pub url: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Validated project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub owner_id: Option<i64>,
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub url: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ProjectForm {
    pub fn validate_project(&self) -> Result<Project, ValidationErrors> {
        let mut errors = collect(self.validate());

        // Upper bound tracks the calendar year at validation time; projects
        // may be dated a little into the future.
        year_range(&mut errors, "year", self.year, 1900, current_year() + 5);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Project {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name.clone(),
            year: self.year,
            description: self.description.clone(),
            url: self.url.clone(),
            tags: self.tags.clone(),
        })
    }
}
