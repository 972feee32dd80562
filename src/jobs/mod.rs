//! Job taxonomy shared by the posting forms and the response DTOs.
//!
//! Two encodings of the employment type exist side by side: the posting forms
//! exchange a small integer code, while the job and application DTOs carry a
//! string label. The two are bridged only through the conversions below and
//! are never assumed interchangeable.

use serde::{Deserialize, Serialize};

/// Integer-coded employment type used by the company/job posting forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
}

impl JobKind {
    pub const fn code(self) -> u8 {
        match self {
            JobKind::FullTime => 0,
            JobKind::PartTime => 1,
            JobKind::Contract => 2,
            JobKind::Internship => 3,
            JobKind::Freelance => 4,
        }
    }

    /// Strict decoding used at intake; codes outside 0-4 are a form error.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(JobKind::FullTime),
            1 => Some(JobKind::PartTime),
            2 => Some(JobKind::Contract),
            3 => Some(JobKind::Internship),
            4 => Some(JobKind::Freelance),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            JobKind::FullTime => "Full-time",
            JobKind::PartTime => "Part-time",
            JobKind::Contract => "Contract",
            JobKind::Internship => "Internship",
            JobKind::Freelance => "Freelance",
        }
    }
}

/// String-labelled employment type carried by job and application DTOs.
///
/// Display code must stay total over legacy backend values, so this encoding
/// carries an `Unknown` sentinel instead of failing on unrecognized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobTypeLabel {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
    Unknown,
}

impl JobTypeLabel {
    /// Total parse of a wire label; anything unrecognized becomes `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "full_time" | "Full-time" => JobTypeLabel::FullTime,
            "part_time" | "Part-time" => JobTypeLabel::PartTime,
            "contract" | "Contract" => JobTypeLabel::Contract,
            "internship" | "Internship" => JobTypeLabel::Internship,
            "freelance" | "Freelance" => JobTypeLabel::Freelance,
            _ => JobTypeLabel::Unknown,
        }
    }

    pub const fn wire(self) -> &'static str {
        match self {
            JobTypeLabel::FullTime => "full_time",
            JobTypeLabel::PartTime => "part_time",
            JobTypeLabel::Contract => "contract",
            JobTypeLabel::Internship => "internship",
            JobTypeLabel::Freelance => "freelance",
            JobTypeLabel::Unknown => "unknown",
        }
    }

    pub const fn display(self) -> &'static str {
        match self {
            JobTypeLabel::FullTime => "Full-time",
            JobTypeLabel::PartTime => "Part-time",
            JobTypeLabel::Contract => "Contract",
            JobTypeLabel::Internship => "Internship",
            JobTypeLabel::Freelance => "Freelance",
            JobTypeLabel::Unknown => "Unknown",
        }
    }

    /// The integer-coded counterpart, when one exists.
    pub const fn kind(self) -> Option<JobKind> {
        match self {
            JobTypeLabel::FullTime => Some(JobKind::FullTime),
            JobTypeLabel::PartTime => Some(JobKind::PartTime),
            JobTypeLabel::Contract => Some(JobKind::Contract),
            JobTypeLabel::Internship => Some(JobKind::Internship),
            JobTypeLabel::Freelance => Some(JobKind::Freelance),
            JobTypeLabel::Unknown => None,
        }
    }
}

/// Total bridge from the integer encoding to the label encoding.
///
/// Codes outside 0-4 degrade to the `Unknown` sentinel so display code never
/// fails on legacy values.
pub fn label_for_code(code: i64) -> JobTypeLabel {
    match JobKind::from_code(code) {
        Some(JobKind::FullTime) => JobTypeLabel::FullTime,
        Some(JobKind::PartTime) => JobTypeLabel::PartTime,
        Some(JobKind::Contract) => JobTypeLabel::Contract,
        Some(JobKind::Internship) => JobTypeLabel::Internship,
        Some(JobKind::Freelance) => JobTypeLabel::Freelance,
        None => JobTypeLabel::Unknown,
    }
}

/// Lifecycle status tracked for a submitted job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    UnderReview,
    Accepted,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Withdrawn => "withdrawn",
        }
    }

    /// Non-throwing parse; unrecognized backend labels yield `None` and the
    /// caller falls back to a sentinel display value.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "submitted" => Some(ApplicationStatus::Submitted),
            "under_review" => Some(ApplicationStatus::UnderReview),
            "accepted" => Some(ApplicationStatus::Accepted),
            "rejected" => Some(ApplicationStatus::Rejected),
            "withdrawn" => Some(ApplicationStatus::Withdrawn),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_one_matches_part_time_label() {
        assert_eq!(label_for_code(1), JobTypeLabel::PartTime);
        assert_eq!(label_for_code(1).display(), JobKind::PartTime.label());
    }

    #[test]
    fn out_of_range_code_degrades_to_unknown() {
        assert_eq!(label_for_code(99), JobTypeLabel::Unknown);
        assert_eq!(label_for_code(-1), JobTypeLabel::Unknown);
        assert_eq!(label_for_code(99).display(), "Unknown");
    }

    #[test]
    fn unrecognized_label_degrades_to_unknown() {
        assert_eq!(JobTypeLabel::parse("gig_economy"), JobTypeLabel::Unknown);
        assert_eq!(JobTypeLabel::parse("freelance"), JobTypeLabel::Freelance);
        assert_eq!(JobTypeLabel::parse("Part-time"), JobTypeLabel::PartTime);
    }

    #[test]
    fn kind_round_trips_through_label_bridge() {
        for kind in [
            JobKind::FullTime,
            JobKind::PartTime,
            JobKind::Contract,
            JobKind::Internship,
            JobKind::Freelance,
        ] {
            let label = label_for_code(kind.code() as i64);
            assert_eq!(label.kind(), Some(kind));
        }
    }

    #[test]
    fn status_parse_is_total_over_unknown_labels() {
        assert_eq!(
            ApplicationStatus::parse("under_review"),
            Some(ApplicationStatus::UnderReview)
        );
        assert_eq!(ApplicationStatus::parse("archived"), None);
    }
}
