//! HR vertical: synthetic dataset, per-screen state, CSV and analytics.
//!
//! [`HrModule`] is the application-state context. It is created once from a
//! [`Dataset`] and hands each screen its own repository; screens never see
//! each other's lists.

pub mod analytics;
pub mod csv_io;
pub mod dataset;
pub mod screens;

use platform_api::ApiResult;
use platform_db::InMemoryRepository;

pub use dataset::{Dataset, DatasetBuilder, DatasetConfig, DatasetError};
use screens::{
    AttendanceScreen, BenefitsScreen, EmployeeScreen, LeaveScreen, PayrollScreen,
    PerformanceScreen, RecruitmentScreen, TrainingScreen,
};

pub struct HrModule {
    pub employees: EmployeeScreen,
    pub leave: LeaveScreen,
    pub attendance: AttendanceScreen,
    pub payroll: PayrollScreen,
    pub performance: PerformanceScreen,
    pub recruitment: RecruitmentScreen,
    pub benefits: BenefitsScreen,
    pub training: TrainingScreen,
}

impl HrModule {
    pub fn from_dataset(data: Dataset) -> ApiResult<Self> {
        let module = Self {
            employees: EmployeeScreen::new(InMemoryRepository::with_records(data.employees)?),
            leave: LeaveScreen::new(InMemoryRepository::with_records(data.leave_requests)?),
            attendance: AttendanceScreen::new(InMemoryRepository::with_records(
                data.attendance_records,
            )?),
            payroll: PayrollScreen::new(InMemoryRepository::with_records(data.payroll_records)?),
            performance: PerformanceScreen::new(InMemoryRepository::with_records(
                data.performance_reviews,
            )?),
            recruitment: RecruitmentScreen::new(
                InMemoryRepository::with_records(data.job_postings)?,
                InMemoryRepository::with_records(data.candidates)?,
            ),
            benefits: BenefitsScreen::new(
                InMemoryRepository::with_records(data.insurance_policies)?,
                InMemoryRepository::with_records(data.work_accidents)?,
                InMemoryRepository::with_records(data.work_certificates)?,
            ),
            training: TrainingScreen::new(InMemoryRepository::with_records(
                data.training_programs,
            )?),
        };
        tracing::debug!("hr module ready");
        Ok(module)
    }

    /// Collects the current state of every screen.
    pub fn snapshot(&self) -> ApiResult<Dataset> {
        Ok(Dataset {
            employees: self.employees.employees()?,
            leave_requests: self.leave.list(&Default::default())?,
            training_programs: self.training.list(&Default::default())?,
            attendance_records: self.attendance.list(&Default::default())?,
            payroll_records: self.payroll.list(&Default::default())?,
            performance_reviews: self.performance.list(&Default::default())?,
            job_postings: self.recruitment.jobs(None)?,
            candidates: self.recruitment.candidates(None)?,
            insurance_policies: self.benefits.policies()?,
            work_accidents: self.benefits.accidents()?,
            work_certificates: self.benefits.certificates()?,
        })
    }
}
