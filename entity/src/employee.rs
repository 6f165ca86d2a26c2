use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

labelled_enum! {
    /// The ten plant departments; each owns a fixed list of positions.
    pub enum Department {
        Engineering => "engineering",
        Manufacturing => "manufacturing",
        Quality => "quality",
        Maintenance => "maintenance",
        Safety => "safety",
        Logistics => "logistics",
        Finance => "finance",
        Hr => "hr",
        It => "it",
        Management => "management",
    }
}

impl Department {
    pub fn positions(self) -> &'static [&'static str] {
        match self {
            Department::Engineering => &[
                "Senior Engineer",
                "Design Engineer",
                "Process Engineer",
                "Project Engineer",
            ],
            Department::Manufacturing => &[
                "Production Manager",
                "Line Supervisor",
                "Machine Operator",
                "Quality Inspector",
            ],
            Department::Quality => &[
                "QA Manager",
                "Quality Inspector",
                "Test Engineer",
                "Compliance Officer",
            ],
            Department::Maintenance => &[
                "Maintenance Manager",
                "Technician",
                "Electrician",
                "Mechanic",
            ],
            Department::Safety => &[
                "Safety Manager",
                "Safety Inspector",
                "HSE Coordinator",
                "Safety Officer",
            ],
            Department::Logistics => &[
                "Logistics Manager",
                "Warehouse Supervisor",
                "Inventory Specialist",
                "Dispatcher",
            ],
            Department::Finance => &[
                "Finance Manager",
                "Accountant",
                "Financial Analyst",
                "Payroll Specialist",
            ],
            Department::Hr => &[
                "HR Manager",
                "HR Specialist",
                "Recruiter",
                "Training Coordinator",
            ],
            Department::It => &[
                "IT Manager",
                "System Administrator",
                "Developer",
                "Help Desk Technician",
            ],
            Department::Management => &[
                "Plant Manager",
                "Operations Director",
                "General Manager",
                "Department Head",
            ],
        }
    }

    pub fn holds_position(self, position: &str) -> bool {
        self.positions().contains(&position)
    }
}

labelled_enum! {
    pub enum EmploymentStatus {
        Active => "active",
        Inactive => "inactive",
        OnLeave => "on-leave",
    }
}

labelled_enum! {
    pub enum Gender {
        Male => "male",
        Female => "female",
        Other => "other",
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub position: String,
    pub hire_date: NaiveDate,
    pub salary: u32,
    pub status: EmploymentStatus,
    pub address: String,
    pub emergency_contact: EmergencyContact,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    /// Imported rows may not carry a gender.
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        crate::full_name(&self.first_name, &self.last_name)
    }

    pub fn holds_valid_position(&self) -> bool {
        self.department.holds_position(&self.position)
    }

    /// Completed years of age on `day`, if a birth date is on file.
    pub fn age_on(&self, day: NaiveDate) -> Option<u32> {
        let born = self.date_of_birth?;
        let mut years = day.year() - born.year();
        if (day.month(), day.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }
}
