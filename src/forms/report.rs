use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// One field-scoped problem found while validating a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
    pub message: String,
}

/// Aggregated outcome of validating one submission.
///
/// Every field and cross-field problem is collected in a single pass so the
/// form can surface all of them at once. Order is deterministic (field, then
/// reason) regardless of rule evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Reason codes recorded against one field, in report order.
    pub fn reasons_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|error| error.field == field)
            .map(|error| error.reason.as_str())
            .collect()
    }
}

impl From<ValidationErrors> for ValidationReport {
    fn from(errors: ValidationErrors) -> Self {
        let mut collected = Vec::new();
        for (field, problems) in errors.field_errors() {
            for problem in problems {
                let message = problem
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                collected.push(FieldError {
                    field: field.to_string(),
                    reason: problem.code.to_string(),
                    message,
                });
            }
        }

        collected.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.reason.cmp(&b.reason)));
        Self { errors: collected }
    }
}
