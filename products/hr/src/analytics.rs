//! Workforce aggregates for the analytics page and the dashboard cards.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use entity::{
    Candidate, CandidateStatus, Department, Employee, EmploymentStatus, Gender, JobStatus,
    LeaveStatus, LeaveType, TrainingStatus, round2,
};
use serde::Serialize;

use crate::dataset::Dataset;

const AGE_BUCKETS: [(&str, u32); 5] = [
    ("<25", 25),
    ("25-34", 35),
    ("35-44", 45),
    ("45-54", 55),
    ("55+", u32::MAX),
];

const SALARY_BANDS: [(&str, u32); 5] = [
    ("<$40k", 40_000),
    ("$40k-$60k", 60_000),
    ("$60k-$80k", 80_000),
    ("$80k-$100k", 100_000),
    (">$100k", u32::MAX),
];

/// Hires within this many days count as new on the dashboard.
const NEW_HIRE_WINDOW_DAYS: i64 = 90;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GenderSplit {
    pub male: usize,
    pub female: usize,
    pub other: usize,
    pub unspecified: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FunnelStage {
    pub stage: CandidateStatus,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub headcount_by_department: BTreeMap<Department, usize>,
    pub gender: GenderSplit,
    /// Employees without a birth date on file are left out.
    pub age_buckets: Vec<Bucket>,
    pub salary_bands: Vec<Bucket>,
    pub funnel: Vec<FunnelStage>,
}

/// Puts each value in the first band whose exclusive upper bound exceeds it.
fn banded(values: impl Iterator<Item = u32>, bands: &[(&'static str, u32)]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = bands
        .iter()
        .map(|&(label, _)| Bucket { label, count: 0 })
        .collect();
    for value in values {
        if let Some(index) = bands.iter().position(|(_, below)| value < *below) {
            buckets[index].count += 1;
        }
    }
    buckets
}

pub fn analytics(employees: &[Employee], candidates: &[Candidate], today: NaiveDate) -> AnalyticsReport {
    let mut headcount_by_department = BTreeMap::new();
    let mut gender = GenderSplit::default();
    for employee in employees {
        *headcount_by_department.entry(employee.department).or_insert(0) += 1;
        match employee.gender {
            Some(Gender::Male) => gender.male += 1,
            Some(Gender::Female) => gender.female += 1,
            Some(Gender::Other) => gender.other += 1,
            None => gender.unspecified += 1,
        }
    }

    let funnel = CandidateStatus::FUNNEL
        .iter()
        .map(|&stage| FunnelStage {
            stage,
            count: candidates
                .iter()
                .filter(|candidate| candidate.status.has_reached(stage))
                .count(),
        })
        .collect();

    AnalyticsReport {
        headcount_by_department,
        gender,
        age_buckets: banded(
            employees.iter().filter_map(|employee| employee.age_on(today)),
            &AGE_BUCKETS,
        ),
        salary_bands: banded(employees.iter().map(|employee| employee.salary), &SALARY_BANDS),
        funnel,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_employees: usize,
    pub active_employees: usize,
    pub open_jobs: usize,
    pub pending_leave: usize,
    pub upcoming_training: usize,
    pub new_hires: usize,
    pub average_salary: f64,
    pub average_rating: f64,
    pub leave_by_type: BTreeMap<LeaveType, usize>,
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    round2(values.sum::<f64>() / count as f64)
}

pub fn dashboard(data: &Dataset, today: NaiveDate) -> DashboardSummary {
    let hired_since = today - Duration::days(NEW_HIRE_WINDOW_DAYS);
    let mut leave_by_type = BTreeMap::new();
    for request in &data.leave_requests {
        *leave_by_type.entry(request.leave_type).or_insert(0) += 1;
    }

    DashboardSummary {
        total_employees: data.employees.len(),
        active_employees: data
            .employees
            .iter()
            .filter(|e| e.status == EmploymentStatus::Active)
            .count(),
        open_jobs: data
            .job_postings
            .iter()
            .filter(|j| j.status == JobStatus::Open)
            .count(),
        pending_leave: data
            .leave_requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Pending)
            .count(),
        upcoming_training: data
            .training_programs
            .iter()
            .filter(|p| p.status == TrainingStatus::Upcoming)
            .count(),
        new_hires: data
            .employees
            .iter()
            .filter(|e| e.hire_date >= hired_since && e.hire_date <= today)
            .count(),
        average_salary: mean(data.employees.iter().map(|e| f64::from(e.salary))),
        average_rating: mean(data.performance_reviews.iter().map(|r| r.overall_rating)),
        leave_by_type,
    }
}
