use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

labelled_enum! {
    pub enum ReviewStatus {
        Draft => "draft",
        Completed => "completed",
        Approved => "approved",
    }
}

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReview {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub review_period: String,
    pub overall_rating: f64,
    pub goals: Vec<String>,
    pub achievements: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub reviewed_by: String,
    pub date: NaiveDate,
    pub status: ReviewStatus,
}

impl PerformanceReview {
    pub fn rating_in_range(rating: f64) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&rating)
    }

    /// Completed and approved reviews both count as finished.
    pub fn is_finished(&self) -> bool {
        matches!(self.status, ReviewStatus::Completed | ReviewStatus::Approved)
    }
}
