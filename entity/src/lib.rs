//! Value records for the HR suite.
//!
//! Every record is created once and then replaced wholesale; nothing here
//! mutates shared state. Derived numeric fields go through the helpers in
//! this crate so the generator and the screens agree on the arithmetic.

use uuid::Uuid;

/// Declares a closed string-labelled enum with its wire label, `ALL`,
/// `as_str`, `parse` and `Display`.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod attendance;
pub mod benefits;
pub mod employee;
pub mod leave;
pub mod payroll;
pub mod performance;
pub mod recruitment;
pub mod training;
pub mod user;

mod clock;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use benefits::{
    AccidentSeverity, AccidentStatus, CertificateStatus, CertificateType, InsurancePolicy,
    InsuranceType, PolicyStatus, WorkAccident, WorkCertificate,
};
pub use employee::{Department, EmergencyContact, Employee, EmploymentStatus, Gender};
pub use leave::{LeaveRequest, LeaveStatus, LeaveType};
pub use payroll::{PayFigures, PayrollRecord, PayrollStatus};
pub use performance::{PerformanceReview, ReviewStatus};
pub use recruitment::{Candidate, CandidateStatus, JobPosting, JobStatus, JobType, SalaryRange};
pub use training::{TrainingCategory, TrainingProgram, TrainingStatus};
pub use user::{User, UserRole};

/// Anything stored in a collection keyed by a unique id.
pub trait Record: Clone {
    fn id(&self) -> Uuid;
}

/// A dependent record carrying a denormalized copy of an employee's name.
pub trait EmployeeLinked: Record {
    fn employee_id(&self) -> Uuid;
    fn employee_name(&self) -> &str;
}

macro_rules! employee_linked {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> Uuid {
                    self.id
                }
            }

            impl EmployeeLinked for $ty {
                fn employee_id(&self) -> Uuid {
                    self.employee_id
                }

                fn employee_name(&self) -> &str {
                    &self.employee_name
                }
            }
        )+
    };
}

employee_linked!(
    LeaveRequest,
    AttendanceRecord,
    PayrollRecord,
    PerformanceReview,
    InsurancePolicy,
    WorkAccident,
    WorkCertificate,
);

impl Record for Employee {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for JobPosting {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Candidate {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for TrainingProgram {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Display name used for every denormalized `employeeName`.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(5416.666_666), 5416.67);
        assert_eq!(round2(0.004), 0.0);
        assert_eq!(round2(-1.005_1), -1.01);
    }

    #[test]
    fn labels_round_trip_through_parse() {
        for status in EmploymentStatus::ALL {
            assert_eq!(EmploymentStatus::parse(status.as_str()), Some(*status));
        }
        assert_eq!(EmploymentStatus::parse("retired"), None);
        assert_eq!(AttendanceStatus::HalfDay.to_string(), "half-day");
    }
}
