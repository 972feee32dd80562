use std::sync::Arc;

use super::common::*;
use crate::intake::{GatewayError, IntakeError, IntakeService, SubmissionKind};

#[test]
fn submit_relays_the_wire_shape() {
    let (service, gateway) = build_service();

    let receipt = service
        .submit_application(42, application())
        .expect("submission succeeds");
    assert_eq!(receipt.kind, SubmissionKind::Application);
    assert!(receipt.submission_id.0.starts_with("sub-"));

    let events = gateway.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        Relayed::Application(dto) => {
            assert_eq!(dto.job_id, 42);
            assert_eq!(dto.portfolio_url, "", "absent link travels as empty string");
            assert_eq!(dto.email, "maya.torres@example.com");
        }
        other => panic!("expected an application relay, got {other:?}"),
    }
}

#[test]
fn invalid_submission_never_reaches_the_gateway() {
    let (service, gateway) = build_service();

    let mut form = application();
    form.terms_accepted = false;
    form.email = "not-an-email".to_string();

    match service.submit_application(42, form) {
        Err(IntakeError::Invalid(report)) => {
            assert_eq!(report.reasons_for("terms_accepted"), vec!["must_accept"]);
            assert_eq!(report.reasons_for("email"), vec!["invalid_email"]);
        }
        other => panic!("expected a validation failure, got {other:?}"),
    }

    assert!(gateway.events().is_empty());
}

#[test]
fn receipts_use_distinct_sequential_ids() {
    let (service, _) = build_service();

    let first = service
        .publish_job_posting(posting())
        .expect("posting accepted");
    let second = service
        .publish_job_posting(posting())
        .expect("posting accepted");

    assert_ne!(first.submission_id, second.submission_id);
    assert_eq!(first.kind, SubmissionKind::JobPosting);
}

#[test]
fn gateway_conflicts_propagate() {
    let service = IntakeService::new(Arc::new(ConflictGateway));

    match service.register(register()) {
        Err(IntakeError::Gateway(GatewayError::Conflict)) => {}
        other => panic!("expected a conflict, got {other:?}"),
    }
}

#[test]
fn login_validates_before_relaying() {
    let (service, gateway) = build_service();

    service.login(login()).expect("login relays");
    assert_eq!(gateway.events().len(), 1);

    let empty = crate::forms::LoginForm {
        identifier: String::new(),
        password: String::new(),
    };
    match service.login(empty) {
        Err(IntakeError::Invalid(report)) => {
            assert_eq!(report.len(), 2);
        }
        other => panic!("expected a validation failure, got {other:?}"),
    }
    assert_eq!(gateway.events().len(), 1, "invalid login is not relayed");
}

#[test]
fn import_relays_valid_rows_and_reports_the_rest() {
    let (service, gateway) = build_service();

    let csv = "Title,Description,Job Type,Salary Min,Salary Max,Location\n\
               Backend Engineer,Own the ingestion services and on-call.,Full-time,95000,130000,Seattle\n\
               QA,Short.,gig,x,70000,B\n";
    let summary = service
        .import_job_postings(csv.as_bytes())
        .expect("import runs");

    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].line, 3);

    let events = gateway.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        Relayed::Job(dto) => assert_eq!(dto.job_type, 0),
        other => panic!("expected a job relay, got {other:?}"),
    }
}
