//! Screen-local state managers.
//!
//! Each screen owns one repository seeded from the dataset and never shares
//! it. Operations that reference an employee or a job posting resolve the
//! display name against the live list handed in by the caller, so a record
//! can never point at a parent that is gone.

pub mod attendance;
pub mod benefits;
pub mod employees;
pub mod leave;
pub mod payroll;
pub mod performance;
pub mod recruitment;
pub mod settings;
pub mod training;

use std::collections::BTreeSet;

use entity::{Employee, JobPosting};
use platform_api::ValidationError;
use uuid::Uuid;

pub use attendance::{AttendanceFilter, AttendanceScreen, AttendanceStats, CHECK_IN_CUTOFF};
pub use benefits::{
    AccidentDraft, BenefitsForm, BenefitsRecord, BenefitsScreen, CertificateDraft, PolicyDraft,
};
pub use employees::{EmployeeDraft, EmployeeFilter, EmployeeForm, EmployeeScreen, ImportOutcome};
pub use leave::{LeaveDraft, LeaveFilter, LeaveScreen, LeaveStats};
pub use payroll::{PayrollFilter, PayrollScreen, PayrollTotals};
pub use performance::{PerformanceFilter, PerformanceScreen, PerformanceStats, ReviewDraft};
pub use recruitment::{CandidateDraft, JobDraft, JobForm, RecruitmentScreen, RecruitmentStats};
pub use settings::{Channel, NotificationPreferences, PasswordChange, SettingsScreen, Topic};
pub use training::{ProgramDraft, TrainingFilter, TrainingScreen, TrainingStats};

/// Looks up the selected employee in the live list.
pub fn resolve_employee(
    employees: &[Employee],
    selected: Option<Uuid>,
) -> Result<&Employee, ValidationError> {
    let id = selected.ok_or(ValidationError::EmployeeNotSelected)?;
    employees
        .iter()
        .find(|employee| employee.id == id)
        .ok_or(ValidationError::UnknownEmployee(id))
}

pub fn resolve_job(jobs: &[JobPosting], id: Uuid) -> Result<&JobPosting, ValidationError> {
    jobs.iter()
        .find(|job| job.id == id)
        .ok_or(ValidationError::UnknownJob(id))
}

/// Distinct values, greatest first.
pub(crate) fn distinct_descending<K, I>(values: I) -> Vec<K>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    values
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}

/// Splits free text into one entry per non-blank line.
pub(crate) fn lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_values_come_out_descending() {
        let periods = distinct_descending(["2025-01", "2025-03", "2025-01", "2024-12"]);
        assert_eq!(periods, vec!["2025-03", "2025-01", "2024-12"]);
    }

    #[test]
    fn blank_lines_are_dropped() {
        assert_eq!(lines("Ship v2\n\n  Mentor juniors  \n"), vec!["Ship v2", "Mentor juniors"]);
        assert!(lines("  \n").is_empty());
    }

    #[test]
    fn missing_selection_is_reported_before_lookup() {
        assert_eq!(
            resolve_employee(&[], None).unwrap_err(),
            ValidationError::EmployeeNotSelected
        );
        let id = Uuid::nil();
        assert_eq!(
            resolve_employee(&[], Some(id)).unwrap_err(),
            ValidationError::UnknownEmployee(id)
        );
    }
}
