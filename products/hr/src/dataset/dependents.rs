//! Generators for records that reference an employee.

use chrono::{Duration, NaiveTime};
use entity::{
    AccidentSeverity, AccidentStatus, AttendanceRecord, AttendanceStatus, CertificateStatus,
    CertificateType, Employee, InsurancePolicy, InsuranceType, LeaveRequest, LeaveStatus,
    LeaveType, PayFigures, PayrollRecord, PayrollStatus, PerformanceReview, PolicyStatus,
    ReviewStatus, WorkAccident, WorkCertificate, attendance::hours_between,
};
use rand::Rng;

use super::{DatasetBuilder, DatasetError, ensure_parents, vocab};

const POLICY_NUMBER_LEN: usize = 12;

impl DatasetBuilder {
    pub fn leave_requests(
        &mut self,
        employees: &[Employee],
        count: usize,
    ) -> Result<Vec<LeaveRequest>, DatasetError> {
        ensure_parents(employees, "leaveRequests", "employees")?;
        Ok((0..count)
            .map(|_| {
                let employee = self.sample(employees);
                self.leave_request(employee)
            })
            .collect())
    }

    fn leave_request(&mut self, employee: &Employee) -> LeaveRequest {
        let start_date = self.future_day(365);
        let end_date = start_date + Duration::days(self.rng.gen_range(1..=14));
        let status = self.pick_variant(LeaveStatus::ALL);
        let approved_by = match status {
            LeaveStatus::Pending => None,
            LeaveStatus::Approved | LeaveStatus::Rejected => Some(self.person_name()),
        };
        LeaveRequest {
            id: self.uuid(),
            employee_id: employee.id,
            employee_name: employee.full_name(),
            leave_type: self.pick_variant(LeaveType::ALL),
            start_date,
            end_date,
            reason: self.sentence(),
            status,
            approved_by,
            created_at: self.recent_instant(1),
        }
    }

    pub fn attendance_records(
        &mut self,
        employees: &[Employee],
        count: usize,
    ) -> Result<Vec<AttendanceRecord>, DatasetError> {
        ensure_parents(employees, "attendanceRecords", "employees")?;
        Ok((0..count)
            .map(|_| {
                let employee = self.sample(employees);
                self.attendance_record(employee)
            })
            .collect())
    }

    fn attendance_record(&mut self, employee: &Employee) -> AttendanceRecord {
        let check_in = self.time_between((7, 0), (9, 30));
        let check_out = self.time_between((16, 0), (19, 0));
        AttendanceRecord {
            id: self.uuid(),
            employee_id: employee.id,
            employee_name: employee.full_name(),
            date: self.recent_day(30),
            check_in,
            check_out: Some(check_out),
            total_hours: hours_between(check_in, check_out).unwrap_or(0.0),
            status: self.pick_variant(&[
                AttendanceStatus::Present,
                AttendanceStatus::Late,
                AttendanceStatus::HalfDay,
            ]),
            location: self.pick(vocab::ATTENDANCE_LOCATIONS).to_string(),
        }
    }

    /// A minute-precision time in `[from, to]`.
    fn time_between(&mut self, from: (u32, u32), to: (u32, u32)) -> NaiveTime {
        let minute = self
            .rng
            .gen_range(from.0 * 60 + from.1..=to.0 * 60 + to.1);
        NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn payroll_records(
        &mut self,
        employees: &[Employee],
        count: usize,
    ) -> Result<Vec<PayrollRecord>, DatasetError> {
        ensure_parents(employees, "payrollRecords", "employees")?;
        Ok((0..count)
            .map(|_| {
                let employee = self.sample(employees);
                self.payroll_record(employee)
            })
            .collect())
    }

    fn payroll_record(&mut self, employee: &Employee) -> PayrollRecord {
        let overtime = self.money(0, 2000);
        let bonuses = self.money(0, 1500);
        let deductions = self.money(200, 800);
        let pay = PayFigures::compute(employee.salary, overtime, bonuses, deductions);
        let period = self.recent_day(30).format("%Y-%m").to_string();
        PayrollRecord {
            id: self.uuid(),
            employee_id: employee.id,
            employee_name: employee.full_name(),
            period,
            base_salary: pay.base_salary,
            overtime,
            bonuses,
            deductions,
            gross_pay: pay.gross_pay,
            net_pay: pay.net_pay,
            status: self.pick_variant(PayrollStatus::ALL),
            pay_date: self.maybe(0.8, |builder| builder.recent_day(2)),
        }
    }

    pub fn performance_reviews(
        &mut self,
        employees: &[Employee],
        count: usize,
    ) -> Result<Vec<PerformanceReview>, DatasetError> {
        ensure_parents(employees, "performanceReviews", "employees")?;
        Ok((0..count)
            .map(|_| {
                let employee = self.sample(employees);
                self.performance_review(employee)
            })
            .collect())
    }

    fn performance_review(&mut self, employee: &Employee) -> PerformanceReview {
        let tenths: u32 = self.rng.gen_range(10..=50);
        PerformanceReview {
            id: self.uuid(),
            employee_id: employee.id,
            employee_name: employee.full_name(),
            review_period: self.pick(vocab::REVIEW_PERIODS).to_string(),
            overall_rating: f64::from(tenths) / 10.0,
            goals: self.pick_some(vocab::GOALS, 2, 4),
            achievements: self.pick_some(vocab::ACHIEVEMENTS, 1, 3),
            improvement_areas: self.pick_some(vocab::IMPROVEMENT_AREAS, 1, 2),
            reviewed_by: self.person_name(),
            date: self.recent_day(90),
            status: self.pick_variant(ReviewStatus::ALL),
        }
    }

    pub fn insurance_policies(
        &mut self,
        employees: &[Employee],
        count: usize,
    ) -> Result<Vec<InsurancePolicy>, DatasetError> {
        ensure_parents(employees, "insurancePolicies", "employees")?;
        Ok((0..count)
            .map(|_| {
                let employee = self.sample(employees);
                self.insurance_policy(employee)
            })
            .collect())
    }

    fn insurance_policy(&mut self, employee: &Employee) -> InsurancePolicy {
        InsurancePolicy {
            id: self.uuid(),
            employee_id: employee.id,
            employee_name: employee.full_name(),
            policy_type: self.pick_variant(InsuranceType::ALL),
            provider: self.pick(vocab::INSURERS).to_string(),
            policy_number: self.policy_number(),
            coverage_amount: self.rng.gen_range(50_000..=500_000),
            monthly_premium: self.money(50, 500),
            start_date: self.past_day(5 * 365),
            status: self.pick_variant(PolicyStatus::ALL),
        }
    }

    fn policy_number(&mut self) -> String {
        (0..POLICY_NUMBER_LEN)
            .map(|_| {
                let index = self.rng.gen_range(0..vocab::POLICY_NUMBER_ALPHABET.len());
                char::from(vocab::POLICY_NUMBER_ALPHABET[index])
            })
            .collect()
    }

    pub fn work_accidents(
        &mut self,
        employees: &[Employee],
        count: usize,
    ) -> Result<Vec<WorkAccident>, DatasetError> {
        ensure_parents(employees, "workAccidents", "employees")?;
        Ok((0..count)
            .map(|_| {
                let employee = self.sample(employees);
                self.work_accident(employee)
            })
            .collect())
    }

    fn work_accident(&mut self, employee: &Employee) -> WorkAccident {
        WorkAccident {
            id: self.uuid(),
            employee_id: employee.id,
            employee_name: employee.full_name(),
            accident_date: self.recent_instant(180),
            location: self.pick(vocab::ACCIDENT_LOCATIONS).to_string(),
            description: self.paragraph(),
            severity: self.pick_variant(AccidentSeverity::ALL),
            status: self.pick_variant(AccidentStatus::ALL),
            follow_up_actions: self.sentence(),
        }
    }

    pub fn work_certificates(
        &mut self,
        employees: &[Employee],
        count: usize,
    ) -> Result<Vec<WorkCertificate>, DatasetError> {
        ensure_parents(employees, "workCertificates", "employees")?;
        Ok((0..count)
            .map(|_| {
                let employee = self.sample(employees);
                self.work_certificate(employee)
            })
            .collect())
    }

    fn work_certificate(&mut self, employee: &Employee) -> WorkCertificate {
        let request_date = self.recent_day(60);
        let status = self.pick_variant(CertificateStatus::ALL);
        let (issue_date, issued_by) = match status {
            CertificateStatus::Requested => (None, None),
            CertificateStatus::Issued | CertificateStatus::Downloaded => {
                let waited = (self.today() - request_date).num_days();
                let issued = request_date + Duration::days(self.rng.gen_range(0..=waited));
                (Some(issued), Some(self.person_name()))
            }
        };
        WorkCertificate {
            id: self.uuid(),
            employee_id: employee.id,
            employee_name: employee.full_name(),
            certificate_type: self.pick_variant(CertificateType::ALL),
            request_date,
            issue_date,
            status,
            issued_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::fixed_now;
    use super::*;

    fn staff(builder: &mut DatasetBuilder) -> Vec<Employee> {
        builder.employees(10)
    }

    #[test]
    fn decided_leave_carries_an_approver() {
        let mut builder = DatasetBuilder::new(Some(21)).at(fixed_now());
        let employees = staff(&mut builder);
        let today = fixed_now().date_naive();
        for request in builder.leave_requests(&employees, 200).unwrap() {
            assert_eq!(
                request.approved_by.is_some(),
                request.status != LeaveStatus::Pending
            );
            assert!(request.start_date > today);
            assert!((2..=15).contains(&request.days()));
        }
    }

    #[test]
    fn attendance_hours_match_times() {
        let mut builder = DatasetBuilder::new(Some(22)).at(fixed_now());
        let employees = staff(&mut builder);
        for record in builder.attendance_records(&employees, 200).unwrap() {
            let check_out = record.check_out.unwrap();
            assert!(record.check_in < check_out);
            assert_eq!(
                Some(record.total_hours),
                hours_between(record.check_in, check_out)
            );
            assert_ne!(record.status, AttendanceStatus::Absent);
        }
    }

    #[test]
    fn payroll_figures_follow_salary() {
        let mut builder = DatasetBuilder::new(Some(23)).at(fixed_now());
        let employees = staff(&mut builder);
        for record in builder.payroll_records(&employees, 100).unwrap() {
            let employee = employees
                .iter()
                .find(|e| e.id == record.employee_id)
                .unwrap();
            let pay = PayFigures::compute(
                employee.salary,
                record.overtime,
                record.bonuses,
                record.deductions,
            );
            assert_eq!(record.base_salary, pay.base_salary);
            assert_eq!(record.net_pay, pay.net_pay);
            assert!(record.net_pay <= record.gross_pay);
            assert_eq!(record.period.len(), 7);
        }
    }

    #[test]
    fn reviews_respect_rating_and_list_bounds() {
        let mut builder = DatasetBuilder::new(Some(24)).at(fixed_now());
        let employees = staff(&mut builder);
        for review in builder.performance_reviews(&employees, 100).unwrap() {
            assert!(PerformanceReview::rating_in_range(review.overall_rating));
            assert!((2..=4).contains(&review.goals.len()));
            assert!((1..=3).contains(&review.achievements.len()));
            assert!((1..=2).contains(&review.improvement_areas.len()));
        }
    }

    #[test]
    fn certificates_are_issued_after_request() {
        let mut builder = DatasetBuilder::new(Some(25)).at(fixed_now());
        let employees = staff(&mut builder);
        for certificate in builder.work_certificates(&employees, 100).unwrap() {
            let requested = certificate.status == CertificateStatus::Requested;
            assert_eq!(certificate.issue_date.is_none(), requested);
            assert_eq!(certificate.issued_by.is_none(), requested);
            if let Some(issued) = certificate.issue_date {
                assert!(issued >= certificate.request_date);
            }
        }
    }

    #[test]
    fn policy_numbers_are_uppercase_alphanumeric() {
        let mut builder = DatasetBuilder::new(Some(26)).at(fixed_now());
        let employees = staff(&mut builder);
        for policy in builder.insurance_policies(&employees, 20).unwrap() {
            assert_eq!(policy.policy_number.len(), POLICY_NUMBER_LEN);
            assert!(
                policy
                    .policy_number
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            );
        }
    }
}
