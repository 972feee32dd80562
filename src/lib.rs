//! Validation and relay layer for job-board intake forms.
//!
//! Each user-facing form has a schema in [`forms`] that turns raw input into a
//! validated record or an aggregated field-error report. The [`dto`] module
//! holds the wire shapes exchanged with the hiring backend, and [`intake`]
//! exposes the submission operations over HTTP behind a gateway trait.

pub mod config;
pub mod dto;
pub mod error;
pub mod forms;
pub mod imports;
pub mod intake;
pub mod jobs;
pub mod reference;
pub mod telemetry;
