//! Submission intake: validate a form, convert it to the wire shape, relay
//! it through the backend gateway, and acknowledge with a receipt.

pub mod backend;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use backend::{BackendGateway, GatewayError, LoggingGateway};
pub use router::intake_router;
pub use service::{
    ImportSummary, IntakeError, IntakeService, SubmissionId, SubmissionKind, SubmissionReceipt,
};
