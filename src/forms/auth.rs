use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::field::{accepted, collect, trimmed, violation};

/// Login payload. The transport layer only requires both fields to be
/// present; password policy lives server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        code = "too_short",
        message = "enter your username or email"
    ))]
    pub identifier: String,
    #[validate(length(min = 1, code = "too_short", message = "enter your password"))]
    pub password: String,
}

/// Validated login credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate_login(&self) -> Result<Credentials, ValidationErrors> {
        let errors = collect(self.validate());
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Credentials {
            identifier: self.identifier.clone(),
            password: self.password.clone(),
        })
    }
}

/// Registration payload: the base account record plus the confirmation
/// password and terms flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, code = "too_short", message = "username is required"))]
    pub username: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(email(code = "invalid_email", message = "email address is not valid"))]
    pub email: String,
    #[validate(length(min = 1, code = "too_short", message = "password is required"))]
    pub password: String,
    #[validate(length(
        min = 1,
        code = "too_short",
        message = "repeat your password to confirm it"
    ))]
    pub confirm_password: String,
    #[validate(custom(function = accepted))]
    pub terms_accepted: bool,
}

/// Validated registration record. The confirmation password and terms flag
/// are intake-only and never leave this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate_registration(&self) -> Result<Registration, ValidationErrors> {
        let mut errors = collect(self.validate());

        // The equality check only runs once both password fields pass their
        // own rules, and a mismatch lands on the confirmation field.
        let passwords_valid = !errors.field_errors().contains_key("password")
            && !errors.field_errors().contains_key("confirm_password");
        if passwords_valid && self.password != self.confirm_password {
            errors.add(
                "confirm_password",
                violation("mismatch", "passwords do not match"),
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Registration {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}
