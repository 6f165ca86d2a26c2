use std::{path::PathBuf, str::FromStr, time::Duration};

use anyhow::{Context, Result};
use products_hr::DatasetConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub dataset: DatasetConfig,
    pub session_dir: PathBuf,
    pub login_delay: Duration,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `load` reads the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = DatasetConfig::default();
        let count = |key: &str, default: usize| parsed(&lookup, key).map(|v| v.unwrap_or(default));

        let dataset = DatasetConfig {
            seed: parsed(&lookup, "HR_SEED")?,
            employees: count("HR_EMPLOYEES", defaults.employees)?,
            leave_requests: count("HR_LEAVE_REQUESTS", defaults.leave_requests)?,
            training_programs: count("HR_TRAINING_PROGRAMS", defaults.training_programs)?,
            attendance_records: count("HR_ATTENDANCE_RECORDS", defaults.attendance_records)?,
            payroll_records: count("HR_PAYROLL_RECORDS", defaults.payroll_records)?,
            performance_reviews: count("HR_PERFORMANCE_REVIEWS", defaults.performance_reviews)?,
            job_postings: count("HR_JOB_POSTINGS", defaults.job_postings)?,
            candidates: count("HR_CANDIDATES", defaults.candidates)?,
            insurance_policies: count("HR_INSURANCE_POLICIES", defaults.insurance_policies)?,
            work_accidents: count("HR_WORK_ACCIDENTS", defaults.work_accidents)?,
            work_certificates: count("HR_WORK_CERTIFICATES", defaults.work_certificates)?,
        };

        let session_dir = lookup("HR_SESSION_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| ".hr-session".into())
            .into();
        let login_delay =
            Duration::from_millis(parsed(&lookup, "HR_LOGIN_DELAY_MS")?.unwrap_or(1000));

        Ok(Self {
            dataset,
            session_dir,
            login_delay,
        })
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("invalid {key}")),
        _ => Ok(None),
    }
}
