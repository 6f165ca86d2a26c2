//! Synthetic Dataset Builder.
//!
//! Fabricates the eleven collections the dashboard starts from. Every
//! dependent record samples its parent uniformly (with replacement) and
//! copies the parent's display name at generation time, so all references
//! resolve and all denormalized names match.

mod catalog;
mod dependents;
mod employees;
pub mod vocab;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use entity::{
    AttendanceRecord, Candidate, Employee, Gender, InsurancePolicy, JobPosting, LeaveRequest,
    PayrollRecord, PerformanceReview, TrainingProgram, WorkAccident, WorkCertificate,
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("cannot generate {collection}: no {parent} to reference")]
    EmptyParent {
        collection: &'static str,
        parent: &'static str,
    },
}

/// Collection sizes and an optional seed. With a seed and a fixed reference
/// instant the output is fully reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetConfig {
    pub seed: Option<u64>,
    pub employees: usize,
    pub leave_requests: usize,
    pub training_programs: usize,
    pub attendance_records: usize,
    pub payroll_records: usize,
    pub performance_reviews: usize,
    pub job_postings: usize,
    pub candidates: usize,
    pub insurance_policies: usize,
    pub work_accidents: usize,
    pub work_certificates: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: None,
            employees: 50,
            leave_requests: 20,
            training_programs: 15,
            attendance_records: 100,
            payroll_records: 50,
            performance_reviews: 30,
            job_postings: 10,
            candidates: 25,
            insurance_policies: 30,
            work_accidents: 15,
            work_certificates: 25,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub employees: Vec<Employee>,
    pub leave_requests: Vec<LeaveRequest>,
    pub training_programs: Vec<TrainingProgram>,
    pub attendance_records: Vec<AttendanceRecord>,
    pub payroll_records: Vec<PayrollRecord>,
    pub performance_reviews: Vec<PerformanceReview>,
    pub job_postings: Vec<JobPosting>,
    pub candidates: Vec<Candidate>,
    pub insurance_policies: Vec<InsurancePolicy>,
    pub work_accidents: Vec<WorkAccident>,
    pub work_certificates: Vec<WorkCertificate>,
}

impl Dataset {
    pub fn generate(config: &DatasetConfig) -> Result<Self, DatasetError> {
        DatasetBuilder::new(config.seed).build(config)
    }
}

pub struct DatasetBuilder {
    rng: StdRng,
    now: DateTime<Utc>,
}

impl DatasetBuilder {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            now: Utc::now(),
        }
    }

    /// Pins the reference instant every relative date is computed from.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn build(mut self, config: &DatasetConfig) -> Result<Dataset, DatasetError> {
        let employees = self.employees(config.employees);
        let leave_requests = self.leave_requests(&employees, config.leave_requests)?;
        let training_programs = self.training_programs(config.training_programs);
        let attendance_records = self.attendance_records(&employees, config.attendance_records)?;
        let payroll_records = self.payroll_records(&employees, config.payroll_records)?;
        let performance_reviews =
            self.performance_reviews(&employees, config.performance_reviews)?;
        let job_postings = self.job_postings(config.job_postings);
        let candidates = self.candidates(&job_postings, config.candidates)?;
        let insurance_policies = self.insurance_policies(&employees, config.insurance_policies)?;
        let work_accidents = self.work_accidents(&employees, config.work_accidents)?;
        let work_certificates = self.work_certificates(&employees, config.work_certificates)?;

        tracing::info!(
            seed = ?config.seed,
            employees = employees.len(),
            leave_requests = leave_requests.len(),
            attendance_records = attendance_records.len(),
            payroll_records = payroll_records.len(),
            job_postings = job_postings.len(),
            candidates = candidates.len(),
            "dataset generated"
        );

        Ok(Dataset {
            employees,
            leave_requests,
            training_programs,
            attendance_records,
            payroll_records,
            performance_reviews,
            job_postings,
            candidates,
            insurance_policies,
            work_accidents,
            work_certificates,
        })
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    fn uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items[self.rng.gen_range(0..items.len())]
    }

    fn pick_variant<E: Copy>(&mut self, variants: &[E]) -> E {
        variants[self.rng.gen_range(0..variants.len())]
    }

    /// Between `min` and `max` distinct entries of `items`.
    fn pick_some(&mut self, items: &[&'static str], min: usize, max: usize) -> Vec<String> {
        let amount = self.rng.gen_range(min..=max);
        items
            .choose_multiple(&mut self.rng, amount)
            .map(|item| item.to_string())
            .collect()
    }

    fn maybe<T>(&mut self, probability: f64, make: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if self.rng.gen_bool(probability) {
            Some(make(self))
        } else {
            None
        }
    }

    /// Uniform sample from a parent collection; callers check it is non-empty.
    fn sample<'p, T>(&mut self, parents: &'p [T]) -> &'p T {
        &parents[self.rng.gen_range(0..parents.len())]
    }

    /// An amount with two decimals between whole-unit bounds.
    fn money(&mut self, min: u32, max: u32) -> f64 {
        let cents = self.rng.gen_range(u64::from(min) * 100..=u64::from(max) * 100);
        cents as f64 / 100.0
    }

    fn first_name(&mut self, gender: Gender) -> String {
        let pool = match gender {
            Gender::Male => vocab::MALE_FIRST_NAMES,
            Gender::Female => vocab::FEMALE_FIRST_NAMES,
            Gender::Other => {
                if self.rng.gen_bool(0.5) {
                    vocab::MALE_FIRST_NAMES
                } else {
                    vocab::FEMALE_FIRST_NAMES
                }
            }
        };
        self.pick(pool).to_string()
    }

    fn last_name(&mut self) -> String {
        self.pick(vocab::LAST_NAMES).to_string()
    }

    fn person_name(&mut self) -> String {
        let gender = self.pick_variant(&[Gender::Male, Gender::Female]);
        let first = self.first_name(gender);
        let last = self.last_name();
        entity::full_name(&first, &last)
    }

    fn email(&mut self, first: &str, last: &str) -> String {
        let number = self.rng.gen_range(1..100);
        let domain = self.pick(vocab::EMAIL_DOMAINS);
        format!(
            "{}.{}{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            number,
            domain
        )
    }

    fn phone(&mut self) -> String {
        format!(
            "+1-555-{:03}-{:04}",
            self.rng.gen_range(100..1000),
            self.rng.gen_range(0..10_000)
        )
    }

    fn street_address(&mut self) -> String {
        let number = self.rng.gen_range(1..10_000);
        let street = self.pick(vocab::STREET_NAMES);
        let suffix = self.pick(vocab::STREET_SUFFIXES);
        format!("{number} {street} {suffix}")
    }

    fn sentence(&mut self) -> String {
        let length = self.rng.gen_range(6..=12);
        let words: Vec<&str> = (0..length).map(|_| self.pick(vocab::FILLER_WORDS)).collect();
        let joined = words.join(" ");
        let mut chars = joined.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }

    fn paragraph(&mut self) -> String {
        let sentences = self.rng.gen_range(3..=5);
        (0..sentences)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A day within the last `days` days, today included.
    fn recent_day(&mut self, days: i64) -> NaiveDate {
        self.today() - Duration::days(self.rng.gen_range(0..days))
    }

    /// A day 1 to `days` days in the past.
    fn past_day(&mut self, days: i64) -> NaiveDate {
        self.today() - Duration::days(self.rng.gen_range(1..=days))
    }

    /// A day 1 to `days` days ahead.
    fn future_day(&mut self, days: i64) -> NaiveDate {
        self.today() + Duration::days(self.rng.gen_range(1..=days))
    }

    /// An instant within the last `days` days.
    fn recent_instant(&mut self, days: i64) -> DateTime<Utc> {
        self.now - Duration::seconds(self.rng.gen_range(0..days * 86_400))
    }
}

fn ensure_parents<T>(
    parents: &[T],
    collection: &'static str,
    parent: &'static str,
) -> Result<(), DatasetError> {
    if parents.is_empty() {
        tracing::warn!(collection, parent, "refusing to generate without parents");
        return Err(DatasetError::EmptyParent { collection, parent });
    }
    Ok(())
}
