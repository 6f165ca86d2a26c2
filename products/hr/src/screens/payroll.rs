use entity::{PayrollRecord, PayrollStatus, round2};
use platform_api::ApiResult;
use platform_db::{InMemoryRepository, Repository};

use super::distinct_descending;
use crate::csv_io::{self, CsvExport};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PayrollFilter {
    pub status: Option<PayrollStatus>,
    /// `YYYY-MM`.
    pub period: Option<String>,
}

impl PayrollFilter {
    pub fn matches(&self, record: &PayrollRecord) -> bool {
        self.status.is_none_or(|status| record.status == status)
            && self
                .period
                .as_deref()
                .is_none_or(|period| record.period == period)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PayrollTotals {
    pub gross_pay: f64,
    pub net_pay: f64,
    pub deductions: f64,
}

pub struct PayrollScreen<R = InMemoryRepository<PayrollRecord>> {
    repo: R,
}

impl<R: Repository<PayrollRecord>> PayrollScreen<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list(&self, filter: &PayrollFilter) -> ApiResult<Vec<PayrollRecord>> {
        Ok(self
            .repo
            .all()?
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect())
    }

    pub fn totals(&self, filter: &PayrollFilter) -> ApiResult<PayrollTotals> {
        let records = self.list(filter)?;
        let sum = |field: fn(&PayrollRecord) -> f64| round2(records.iter().map(field).sum());
        Ok(PayrollTotals {
            gross_pay: sum(|r| r.gross_pay),
            net_pay: sum(|r| r.net_pay),
            deductions: sum(|r| r.deductions),
        })
    }

    /// Every period on file, newest first.
    pub fn periods(&self) -> ApiResult<Vec<String>> {
        Ok(distinct_descending(
            self.repo.all()?.into_iter().map(|r| r.period),
        ))
    }

    /// Periods that still hold draft records, newest first.
    pub fn draft_periods(&self) -> ApiResult<Vec<String>> {
        Ok(distinct_descending(
            self.repo
                .all()?
                .into_iter()
                .filter(|r| r.status == PayrollStatus::Draft)
                .map(|r| r.period),
        ))
    }

    /// Moves every draft record of `period` to processed. Returns how many
    /// changed.
    pub fn process_period(&mut self, period: &str) -> ApiResult<usize> {
        let drafts: Vec<_> = self
            .repo
            .all()?
            .into_iter()
            .filter(|r| r.period == period && r.status == PayrollStatus::Draft)
            .collect();
        let count = drafts.len();
        for mut record in drafts {
            record.status = PayrollStatus::Processed;
            self.repo.replace(record)?;
        }
        tracing::info!(period, count, "payroll period processed");
        Ok(count)
    }

    /// Records that are processed or already paid.
    pub fn processed_count(&self) -> ApiResult<usize> {
        Ok(self
            .repo
            .all()?
            .iter()
            .filter(|r| matches!(r.status, PayrollStatus::Processed | PayrollStatus::Paid))
            .count())
    }

    pub fn export(&self, filter: &PayrollFilter) -> ApiResult<CsvExport> {
        csv_io::export_payroll(&self.list(filter)?)
    }
}
