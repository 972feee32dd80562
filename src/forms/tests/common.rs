use chrono::NaiveDate;

use crate::forms::{
    AboutProfileForm, AgeValue, ApplicationOptions, CompanyProfileForm, JobApplicationForm,
    JobPostingForm, LoginForm, ProjectForm, PublicationForm, RegisterForm, ResumeRef, Visibility,
};

pub(super) fn options() -> ApplicationOptions {
    ApplicationOptions::standard()
}

pub(super) fn application() -> JobApplicationForm {
    JobApplicationForm {
        first_name: "Maya".to_string(),
        last_name: "Torres".to_string(),
        email: "maya.torres@example.com".to_string(),
        phone: "+1 555 0101".to_string(),
        linkedin_url: Some("https://www.linkedin.com/in/maya-torres".to_string()),
        portfolio_url: None,
        experience_level: "Senior".to_string(),
        education_level: "Bachelor's degree".to_string(),
        availability: "Two weeks".to_string(),
        salary_expectation: "$100k-$130k".to_string(),
        skills: "Rust, distributed systems, observability tooling, and incident response."
            .to_string(),
        cover_letter: "I have spent six years building ingestion pipelines and would love to \
                       bring that experience to your platform team."
            .to_string(),
        relocate: true,
        terms_accepted: true,
        resume: Some(ResumeRef {
            file_name: "maya-torres.pdf".to_string(),
            storage_key: "uploads/resumes/maya-torres.pdf".to_string(),
        }),
    }
}

pub(super) fn company() -> CompanyProfileForm {
    CompanyProfileForm {
        name: "Lumen Analytics".to_string(),
        introduction: "We build forecasting tools for mid-market retailers.".to_string(),
        website: "https://lumen-analytics.example.com".to_string(),
        industry: "Software".to_string(),
        area: "Boston".to_string(),
        founded_on: NaiveDate::from_ymd_opt(2017, 3, 6).expect("valid date"),
    }
}

pub(super) fn posting() -> JobPostingForm {
    JobPostingForm {
        title: "Backend Engineer".to_string(),
        description: "Own the ingestion services and their on-call rotation.".to_string(),
        job_type: 0,
        salary_min: 95_000,
        salary_max: 130_000,
        location: "Seattle".to_string(),
    }
}

pub(super) fn about_profile() -> AboutProfileForm {
    AboutProfileForm {
        first_name: "Noa".to_string(),
        last_name: "Lindberg".to_string(),
        age: AgeValue::Number(29),
        email: Some("noa@example.com".to_string()),
        area: Some("Seattle".to_string()),
        visibility: Visibility::Private,
        intro: Some("Platform engineer focused on developer tooling.".to_string()),
        contact_number: Some("+1 555 0188".to_string()),
    }
}

pub(super) fn login() -> LoginForm {
    LoginForm {
        identifier: "noa@example.com".to_string(),
        password: "hunter2hunter2".to_string(),
    }
}

pub(super) fn register() -> RegisterForm {
    RegisterForm {
        username: "noa.lindberg".to_string(),
        email: "noa@example.com".to_string(),
        password: "abc123".to_string(),
        confirm_password: "abc123".to_string(),
        terms_accepted: true,
    }
}

pub(super) fn project() -> ProjectForm {
    ProjectForm {
        id: 41,
        owner_id: Some(7),
        name: "Query planner visualizer".to_string(),
        year: 2024,
        description: Some("Interactive EXPLAIN output explorer.".to_string()),
        url: Some("https://github.com/example/planner-viz".to_string()),
        tags: Some(vec!["rust".to_string(), "tooling".to_string()]),
    }
}

pub(super) fn publication() -> PublicationForm {
    PublicationForm {
        id: 12,
        owner_id: Some(7),
        title: "Sampling strategies for streaming aggregation".to_string(),
        publisher: "Journal of Data Engineering".to_string(),
        year: 2022,
        url: Some("example.com/papers/sampling".to_string()),
        description: "Survey of reservoir sampling variants under bursty load.".to_string(),
    }
}
