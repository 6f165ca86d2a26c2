use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Department;

labelled_enum! {
    pub enum JobType {
        FullTime => "full-time",
        PartTime => "part-time",
        Contract => "contract",
        Intern => "intern",
    }
}

labelled_enum! {
    pub enum JobStatus {
        Open => "open",
        Closed => "closed",
        Filled => "filled",
    }
}

labelled_enum! {
    /// Declared in funnel order: every stage implies the ones before it,
    /// except `Rejected`, which only implies `Applied`.
    pub enum CandidateStatus {
        Applied => "applied",
        Screening => "screening",
        Interview => "interview",
        Offer => "offer",
        Hired => "hired",
        Rejected => "rejected",
    }
}

impl CandidateStatus {
    /// The funnel stages, widest first.
    pub const FUNNEL: [CandidateStatus; 5] = [
        CandidateStatus::Applied,
        CandidateStatus::Screening,
        CandidateStatus::Interview,
        CandidateStatus::Offer,
        CandidateStatus::Hired,
    ];

    /// Whether a candidate in this status has passed through `stage`.
    pub fn has_reached(self, stage: CandidateStatus) -> bool {
        match (self, stage) {
            (_, CandidateStatus::Applied) => true,
            (CandidateStatus::Rejected, _) => false,
            (_, CandidateStatus::Rejected) => false,
            (current, stage) => current >= stage,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

impl SalaryRange {
    pub fn is_ordered(&self) -> bool {
        self.min < self.max
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub department: Department,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary: SalaryRange,
    pub status: JobStatus,
    pub posted_date: NaiveDate,
    pub applications: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    pub experience: u32,
    pub skills: Vec<String>,
    pub status: CandidateStatus,
    pub applied_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        crate::full_name(&self.first_name, &self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funnel_stages_nest() {
        assert!(CandidateStatus::Hired.has_reached(CandidateStatus::Screening));
        assert!(CandidateStatus::Offer.has_reached(CandidateStatus::Offer));
        assert!(!CandidateStatus::Screening.has_reached(CandidateStatus::Interview));
        assert!(CandidateStatus::Rejected.has_reached(CandidateStatus::Applied));
        assert!(!CandidateStatus::Rejected.has_reached(CandidateStatus::Screening));
    }
}
