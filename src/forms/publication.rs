use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::field::{bounded, collect, current_year, empty_string_as_none, lenient_url, trimmed, year_range};

/// Raw publication entry payload.
///
/// Publication links routinely arrive as bare domains copied from citation
/// managers, so the URL rule here is the permissive one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PublicationForm {
    pub id: i64,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(deserialize_with = "trimmed")]
    pub title: String,
    #[serde(default, deserialize_with = "trimmed")]
    pub publisher: String,
    pub year: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(custom(function = lenient_url))]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "trimmed")]
    pub description: String,
}

/// Validated publication record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: i64,
    pub owner_id: Option<i64>,
    pub title: String,
    pub publisher: String,
    pub year: i32,
    pub url: Option<String>,
    pub description: String,
}

impl PublicationForm {
    pub fn validate_publication(&self) -> Result<Publication, ValidationErrors> {
        let mut errors = collect(self.validate());

        bounded(&mut errors, "title", &self.title, 1, 200);
        bounded(&mut errors, "publisher", &self.publisher, 0, 100);
        bounded(&mut errors, "description", &self.description, 0, 500);
        year_range(&mut errors, "year", self.year, 1900, current_year());

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Publication {
            id: self.id,
            owner_id: self.owner_id,
            title: self.title.clone(),
            publisher: self.publisher.clone(),
            year: self.year,
            url: self.url.clone(),
            description: self.description.clone(),
        })
    }
}
