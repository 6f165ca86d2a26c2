use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

labelled_enum! {
    pub enum LeaveType {
        Annual => "annual",
        Sick => "sick",
        Personal => "personal",
        Maternity => "maternity",
        Emergency => "emergency",
    }
}

labelled_enum! {
    pub enum LeaveStatus {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

/// A leave request. `approved_by` is set exactly when the request has been
/// decided (approved or rejected).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Calendar days covered, both ends inclusive.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().abs() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_include_both_ends() {
        let request = LeaveRequest {
            id: Uuid::nil(),
            employee_id: Uuid::nil(),
            employee_name: "Ada Lovelace".into(),
            leave_type: LeaveType::Annual,
            start_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            reason: "Family trip".into(),
            status: LeaveStatus::Pending,
            approved_by: None,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        };
        assert_eq!(request.days(), 5);
    }
}
