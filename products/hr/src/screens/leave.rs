use chrono::{DateTime, NaiveDate, Utc};
use entity::{Employee, LeaveRequest, LeaveStatus, LeaveType};
use platform_api::{ApiResult, ValidationError};
use platform_db::{InMemoryRepository, Repository};
use uuid::Uuid;

use super::{require, resolve_employee};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaveDraft {
    pub employee_id: Option<Uuid>,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaveFilter {
    pub status: Option<LeaveStatus>,
    pub leave_type: Option<LeaveType>,
}

impl LeaveFilter {
    pub fn matches(&self, request: &LeaveRequest) -> bool {
        self.status.is_none_or(|status| request.status == status)
            && self.leave_type.is_none_or(|kind| request.leave_type == kind)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaveStats {
    pub pending: usize,
    pub approved: usize,
    pub total_days: i64,
}

pub struct LeaveScreen<R = InMemoryRepository<LeaveRequest>> {
    repo: R,
}

impl<R: Repository<LeaveRequest>> LeaveScreen<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list(&self, filter: &LeaveFilter) -> ApiResult<Vec<LeaveRequest>> {
        Ok(self
            .repo
            .all()?
            .into_iter()
            .filter(|request| filter.matches(request))
            .collect())
    }

    /// Files a pending request for an employee from the live list.
    pub fn create(
        &mut self,
        employees: &[Employee],
        draft: LeaveDraft,
        now: DateTime<Utc>,
    ) -> ApiResult<LeaveRequest> {
        let employee = resolve_employee(employees, draft.employee_id)?;
        if draft.end_date < draft.start_date {
            return Err(ValidationError::InvalidDateRange.into());
        }
        require(&draft.reason, "reason")?;

        let request = LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            employee_name: employee.full_name(),
            leave_type: draft.leave_type,
            start_date: draft.start_date,
            end_date: draft.end_date,
            reason: draft.reason,
            status: LeaveStatus::Pending,
            approved_by: None,
            created_at: now,
        };
        self.repo.prepend(request.clone())?;
        tracing::info!(request_id = %request.id, employee_id = %employee.id, "leave requested");
        Ok(request)
    }

    pub fn approve(&mut self, id: Uuid, approver: &str) -> ApiResult<LeaveRequest> {
        self.decide(id, LeaveStatus::Approved, approver)
    }

    pub fn reject(&mut self, id: Uuid, approver: &str) -> ApiResult<LeaveRequest> {
        self.decide(id, LeaveStatus::Rejected, approver)
    }

    fn decide(&mut self, id: Uuid, status: LeaveStatus, approver: &str) -> ApiResult<LeaveRequest> {
        let mut request = self.repo.get(id)?;
        request.status = status;
        request.approved_by = Some(approver.to_string());
        self.repo.replace(request.clone())?;
        tracing::info!(request_id = %id, %status, "leave decided");
        Ok(request)
    }

    pub fn stats(&self) -> ApiResult<LeaveStats> {
        let requests = self.repo.all()?;
        Ok(LeaveStats {
            pending: requests
                .iter()
                .filter(|r| r.status == LeaveStatus::Pending)
                .count(),
            approved: requests
                .iter()
                .filter(|r| r.status == LeaveStatus::Approved)
                .count(),
            total_days: requests.iter().map(LeaveRequest::days).sum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetBuilder;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn draft(employee_id: Option<Uuid>) -> LeaveDraft {
        LeaveDraft {
            employee_id,
            leave_type: LeaveType::Annual,
            start_date: day(2),
            end_date: day(6),
            reason: "Family visit".into(),
        }
    }

    #[test]
    fn created_requests_are_pending_and_first() {
        let employees = DatasetBuilder::new(Some(4)).employees(3);
        let mut screen = LeaveScreen::new(InMemoryRepository::new());
        screen.create(&employees, draft(Some(employees[0].id)), Utc::now()).unwrap();
        let second = screen
            .create(&employees, draft(Some(employees[1].id)), Utc::now())
            .unwrap();

        let all = screen.list(&LeaveFilter::default()).unwrap();
        assert_eq!(all[0].id, second.id);
        assert_eq!(second.status, LeaveStatus::Pending);
        assert_eq!(second.employee_name, employees[1].full_name());
        assert_eq!(second.approved_by, None);
    }

    #[test]
    fn unknown_or_missing_employee_is_rejected() {
        let employees = DatasetBuilder::new(Some(4)).employees(1);
        let mut screen = LeaveScreen::new(InMemoryRepository::new());
        let err = screen.create(&employees, draft(None), Utc::now()).unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::EmployeeNotSelected));
        let ghost = Uuid::new_v4();
        let err = screen
            .create(&employees, draft(Some(ghost)), Utc::now())
            .unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::UnknownEmployee(ghost)));
        assert!(screen.list(&LeaveFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn reversed_dates_are_rejected() {
        let employees = DatasetBuilder::new(Some(4)).employees(1);
        let mut screen = LeaveScreen::new(InMemoryRepository::new());
        let mut reversed = draft(Some(employees[0].id));
        reversed.start_date = day(9);
        let err = screen.create(&employees, reversed, Utc::now()).unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::InvalidDateRange));
    }

    #[test]
    fn decisions_record_the_approver_and_feed_stats() {
        let employees = DatasetBuilder::new(Some(4)).employees(2);
        let mut screen = LeaveScreen::new(InMemoryRepository::new());
        let a = screen.create(&employees, draft(Some(employees[0].id)), Utc::now()).unwrap();
        let b = screen.create(&employees, draft(Some(employees[1].id)), Utc::now()).unwrap();

        let approved = screen.approve(a.id, "Sarah Johnson").unwrap();
        assert_eq!(approved.approved_by.as_deref(), Some("Sarah Johnson"));
        screen.reject(b.id, "Sarah Johnson").unwrap();

        let stats = screen.stats().unwrap();
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.total_days, 10);

        let only_rejected = LeaveFilter {
            status: Some(LeaveStatus::Rejected),
            leave_type: None,
        };
        assert_eq!(screen.list(&only_rejected).unwrap()[0].id, b.id);
    }
}
