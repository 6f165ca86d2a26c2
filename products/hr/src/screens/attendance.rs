use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use entity::{AttendanceRecord, AttendanceStatus, Employee, attendance::hours_between, round2};
use platform_api::{ApiResult, ValidationError};
use platform_db::{InMemoryRepository, Repository};
use uuid::Uuid;

use super::resolve_employee;
use crate::csv_io::{self, CsvExport};

/// Check-ins at or after this hour are late.
pub const CHECK_IN_CUTOFF: u32 = 9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub status: Option<AttendanceStatus>,
    pub date: Option<NaiveDate>,
}

impl AttendanceFilter {
    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        self.status.is_none_or(|status| record.status == status)
            && self.date.is_none_or(|date| record.date == date)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AttendanceStats {
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub total_hours: f64,
    pub average_hours: f64,
}

pub struct AttendanceScreen<R = InMemoryRepository<AttendanceRecord>> {
    repo: R,
}

fn to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|time| time.with_nanosecond(0))
        .unwrap_or(time)
}

impl<R: Repository<AttendanceRecord>> AttendanceScreen<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list(&self, filter: &AttendanceFilter) -> ApiResult<Vec<AttendanceRecord>> {
        Ok(self
            .repo
            .all()?
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect())
    }

    fn open_record(&self, employee_id: Uuid, day: NaiveDate) -> ApiResult<Option<AttendanceRecord>> {
        Ok(self.repo.all()?.into_iter().find(|record| {
            record.employee_id == employee_id && record.date == day && record.is_open()
        }))
    }

    /// Opens today's record. One record per employee per day.
    pub fn check_in(
        &mut self,
        employees: &[Employee],
        selected: Option<Uuid>,
        at: NaiveDateTime,
        location: &str,
    ) -> ApiResult<AttendanceRecord> {
        let employee = resolve_employee(employees, selected)?;
        let day = at.date();
        let already = self
            .repo
            .all()?
            .iter()
            .any(|record| record.employee_id == employee.id && record.date == day);
        if already {
            tracing::debug!(employee_id = %employee.id, %day, "duplicate check-in");
            return Err(ValidationError::AlreadyCheckedIn.into());
        }

        let check_in = to_minute(at.time());
        let status = if check_in.hour() >= CHECK_IN_CUTOFF {
            AttendanceStatus::Late
        } else {
            AttendanceStatus::Present
        };
        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            employee_name: employee.full_name(),
            date: day,
            check_in,
            check_out: None,
            total_hours: 0.0,
            status,
            location: location.to_string(),
        };
        self.repo.prepend(record.clone())?;
        tracing::info!(record_id = %record.id, employee_id = %employee.id, %status, "checked in");
        Ok(record)
    }

    /// Closes the employee's open record for the day of `at`.
    pub fn check_out(
        &mut self,
        selected: Option<Uuid>,
        at: NaiveDateTime,
    ) -> ApiResult<AttendanceRecord> {
        let employee_id = selected.ok_or(ValidationError::EmployeeNotSelected)?;
        let mut record = self
            .open_record(employee_id, at.date())?
            .ok_or(ValidationError::NoOpenCheckIn)?;

        let check_out = to_minute(at.time());
        let total_hours =
            hours_between(record.check_in, check_out).ok_or(ValidationError::CheckOutBeforeCheckIn)?;
        record.check_out = Some(check_out);
        record.total_hours = total_hours;
        self.repo.replace(record.clone())?;
        tracing::info!(record_id = %record.id, %employee_id, total_hours, "checked out");
        Ok(record)
    }

    /// Employees from the live list with an open record on `day`.
    pub fn checked_in(&self, employees: &[Employee], day: NaiveDate) -> ApiResult<Vec<Employee>> {
        let open: HashSet<Uuid> = self
            .repo
            .all()?
            .iter()
            .filter(|record| record.date == day && record.is_open())
            .map(|record| record.employee_id)
            .collect();
        Ok(employees
            .iter()
            .filter(|employee| open.contains(&employee.id))
            .cloned()
            .collect())
    }

    pub fn stats(&self, filter: &AttendanceFilter) -> ApiResult<AttendanceStats> {
        let records = self.list(filter)?;
        let count = |status: AttendanceStatus| records.iter().filter(|r| r.status == status).count();
        let total_hours: f64 = records.iter().map(|r| r.total_hours).sum();
        let average_hours = if records.is_empty() {
            0.0
        } else {
            total_hours / records.len() as f64
        };
        Ok(AttendanceStats {
            present: count(AttendanceStatus::Present),
            late: count(AttendanceStatus::Late),
            absent: count(AttendanceStatus::Absent),
            total_hours: round2(total_hours),
            average_hours: round2(average_hours),
        })
    }

    pub fn export(&self, filter: &AttendanceFilter) -> ApiResult<CsvExport> {
        csv_io::export_attendance(&self.list(filter)?)
    }
}
