use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{clock, round2};

labelled_enum! {
    pub enum AttendanceStatus {
        Present => "present",
        Late => "late",
        HalfDay => "half-day",
        Absent => "absent",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub date: NaiveDate,
    #[serde(with = "clock::hhmm")]
    pub check_in: NaiveTime,
    #[serde(
        default,
        with = "clock::option_hhmm",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_out: Option<NaiveTime>,
    pub total_hours: f64,
    pub status: AttendanceStatus,
    pub location: String,
}

impl AttendanceRecord {
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }
}

/// Hours between two same-day times, rounded to two decimals. `None` when
/// `check_out` precedes `check_in`.
pub fn hours_between(check_in: NaiveTime, check_out: NaiveTime) -> Option<f64> {
    let minutes = (check_out - check_in).num_minutes();
    if minutes < 0 {
        return None;
    }
    Some(round2(minutes as f64 / 60.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn hours_are_rounded_to_two_decimals() {
        assert_eq!(hours_between(at(8, 0), at(16, 30)), Some(8.5));
        assert_eq!(hours_between(at(8, 50), at(17, 0)), Some(8.17));
        assert_eq!(hours_between(at(9, 0), at(9, 0)), Some(0.0));
        assert_eq!(hours_between(at(17, 0), at(9, 0)), None);
    }

    #[test]
    fn times_serialize_as_hours_and_minutes() {
        let record = AttendanceRecord {
            id: Uuid::nil(),
            employee_id: Uuid::nil(),
            employee_name: "Ada Lovelace".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            check_in: at(8, 5),
            check_out: None,
            total_hours: 0.0,
            status: AttendanceStatus::Present,
            location: "Warehouse".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["checkIn"], "08:05");
        assert!(json.get("checkOut").is_none());
        let back: AttendanceRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
