use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::field::{collect, empty_string_as_none, trimmed, violation, AgeValue};
use crate::reference::is_known_area;

/// Profile visibility. Defaults to private until the member opts in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

impl Visibility {
    pub const fn label(self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Public => "public",
        }
    }
}

/// Raw "about" profile payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AboutProfileForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, code = "too_short", message = "first name is required"))]
    pub first_name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, code = "too_short", message = "last name is required"))]
    pub last_name: String,
    pub age: AgeValue,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(email(code = "invalid_email", message = "email address is not valid"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub area: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(
        min = 10,
        code = "too_short",
        message = "the intro needs at least 10 characters"
    ))]
    pub intro: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub contact_number: Option<String>,
}

/// Validated "about" profile record. Optional fields are genuine options
/// here; the empty-string sentinel only exists at the wire boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutProfile {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: Option<String>,
    pub area: Option<String>,
    pub visibility: Visibility,
    pub intro: Option<String>,
    pub contact_number: Option<String>,
}

impl AboutProfileForm {
    pub fn validate_profile(&self) -> Result<AboutProfile, ValidationErrors> {
        let mut errors = collect(self.validate());

        let age = match self.age.as_years() {
            None => {
                errors.add("age", violation("not_a_number", "age must be a number"));
                None
            }
            Some(years) if years < 18 => {
                errors.add(
                    "age",
                    violation("out_of_range", "you must be at least 18 years old"),
                );
                None
            }
            Some(years) => match u32::try_from(years) {
                Ok(age) => Some(age),
                Err(_) => {
                    errors.add("age", violation("out_of_range", "age is out of range"));
                    None
                }
            },
        };

        if let Some(area) = self.area.as_deref() {
            if !is_known_area(area) {
                errors.add(
                    "area",
                    violation("invalid_choice", "area is not one of the listed cities"),
                );
            }
        }

        match age {
            Some(age) if errors.is_empty() => Ok(AboutProfile {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                age,
                email: self.email.clone(),
                area: self.area.clone(),
                visibility: self.visibility,
                intro: self.intro.clone(),
                contact_number: self.contact_number.clone(),
            }),
            _ => Err(errors),
        }
    }
}
