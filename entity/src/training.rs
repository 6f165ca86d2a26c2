use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

labelled_enum! {
    pub enum TrainingCategory {
        Safety => "Safety",
        Technical => "Technical",
        Management => "Management",
        Compliance => "Compliance",
        SoftSkills => "Soft Skills",
    }
}

labelled_enum! {
    pub enum TrainingStatus {
        Upcoming => "upcoming",
        Ongoing => "ongoing",
        Completed => "completed",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgram {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: u32,
    pub enrolled: u32,
    pub category: TrainingCategory,
    pub status: TrainingStatus,
}

impl TrainingProgram {
    /// Enrollment as a whole percentage of capacity; 0 for zero capacity.
    pub fn progress_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        (f64::from(self.enrolled) / f64::from(self.capacity) * 100.0).round() as u32
    }
}
