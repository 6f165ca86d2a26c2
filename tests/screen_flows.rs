use chrono::{Duration, NaiveTime};
use entity::{
    AttendanceStatus, CandidateStatus, CertificateType, Department, EmergencyContact,
    EmploymentStatus, LeaveStatus, LeaveType, PayrollStatus,
};
use platform_api::{ApiError, ValidationError};
use products_hr::HrModule;
use products_hr::screens::{
    AttendanceFilter, BenefitsForm, BenefitsRecord, CandidateDraft, CertificateDraft,
    EmployeeDraft, EmployeeForm, LeaveDraft, LeaveFilter, PayrollFilter,
};
use suite_tests::{fixed_now, seeded, today, today_at};
use uuid::Uuid;

fn module(seed: u64) -> HrModule {
    HrModule::from_dataset(seeded(seed).unwrap()).unwrap()
}

fn new_hire(first: &str, last: &str) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first.into(),
        last_name: last.into(),
        email: format!("{}.{}@company.com", first.to_lowercase(), last.to_lowercase()),
        phone: "+1-555-010-0199".into(),
        department: Department::Quality,
        position: Department::Quality.positions()[0].into(),
        hire_date: today(),
        salary: 52_000,
        status: EmploymentStatus::Active,
        address: "400 Harbor Road".into(),
        emergency_contact: EmergencyContact::default(),
        skills: vec!["Auditing".into()],
        certifications: vec![],
        gender: None,
        date_of_birth: None,
    }
}

fn rejection(err: ApiError) -> ValidationError {
    err.validation().cloned().unwrap()
}

#[test]
fn late_check_in_then_check_out_records_hours() {
    let mut hr = module(8);
    let hire = hr
        .employees
        .submit(EmployeeForm::Add(new_hire("Noor", "Haddad")))
        .unwrap();
    let staff = hr.employees.employees().unwrap();

    let record = hr
        .attendance
        .check_in(&staff, Some(hire.id), today_at(9, 15), "Main Office")
        .unwrap();
    assert_eq!(record.status, AttendanceStatus::Late);
    assert_eq!(record.check_in, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    assert_eq!(record.employee_name, "Noor Haddad");
    assert!(record.check_out.is_none());
    assert_eq!(
        hr.attendance.checked_in(&staff, today()).unwrap()[0].id,
        hire.id
    );

    let second = hr
        .attendance
        .check_in(&staff, Some(hire.id), today_at(10, 0), "Main Office")
        .unwrap_err();
    assert_eq!(rejection(second), ValidationError::AlreadyCheckedIn);

    let closed = hr
        .attendance
        .check_out(Some(hire.id), today_at(17, 45))
        .unwrap();
    assert_eq!(closed.total_hours, 8.5);
    assert!(hr.attendance.checked_in(&staff, today()).unwrap().is_empty());
}

#[test]
fn check_out_without_check_in_changes_nothing() {
    let mut hr = module(8);
    let hire = hr
        .employees
        .submit(EmployeeForm::Add(new_hire("Ines", "Moreau")))
        .unwrap();
    let before = hr.attendance.list(&AttendanceFilter::default()).unwrap();

    let err = hr
        .attendance
        .check_out(Some(hire.id), today_at(17, 0))
        .unwrap_err();
    assert_eq!(rejection(err), ValidationError::NoOpenCheckIn);
    assert_eq!(hr.attendance.list(&AttendanceFilter::default()).unwrap(), before);
}

#[test]
fn requests_for_removed_employees_are_refused() {
    let mut hr = module(21);
    let leaving = hr.employees.employees().unwrap()[0].clone();
    hr.employees.delete(leaving.id).unwrap();
    let staff = hr.employees.employees().unwrap();
    let before = hr.leave.list(&LeaveFilter::default()).unwrap().len();

    let start = today() + Duration::days(7);
    let draft = LeaveDraft {
        employee_id: Some(leaving.id),
        leave_type: LeaveType::Annual,
        start_date: start,
        end_date: start + Duration::days(2),
        reason: "Family visit".into(),
    };
    let err = hr.leave.create(&staff, draft.clone(), fixed_now()).unwrap_err();
    assert_eq!(rejection(err), ValidationError::UnknownEmployee(leaving.id));
    assert_eq!(hr.leave.list(&LeaveFilter::default()).unwrap().len(), before);

    let stayer = staff[0].id;
    let request = hr
        .leave
        .create(&staff, LeaveDraft { employee_id: Some(stayer), ..draft }, fixed_now())
        .unwrap();
    assert_eq!(request.status, LeaveStatus::Pending);
    assert_eq!(request.days(), 3);
    let approved = hr.leave.approve(request.id, "Sarah Johnson").unwrap();
    assert_eq!(approved.approved_by.as_deref(), Some("Sarah Johnson"));
}

#[test]
fn certificate_requests_copy_the_employee_name() {
    let mut hr = module(13);
    let staff = hr.employees.employees().unwrap();
    let holder = &staff[3];

    let form = BenefitsForm::Certificate(CertificateDraft {
        employee_id: Some(holder.id),
        certificate_type: CertificateType::Salary,
    });
    let BenefitsRecord::Certificate(certificate) =
        hr.benefits.submit(&staff, form, today()).unwrap()
    else {
        panic!("expected a certificate");
    };
    assert_eq!(certificate.employee_name, holder.full_name());
    assert_eq!(certificate.request_date, today());
    assert!(certificate.issue_date.is_none());
    assert_eq!(hr.benefits.certificates().unwrap()[0].id, certificate.id);

    let unselected = BenefitsForm::Certificate(CertificateDraft {
        employee_id: None,
        certificate_type: CertificateType::Work,
    });
    let err = hr.benefits.submit(&staff, unselected, today()).unwrap_err();
    assert_eq!(rejection(err), ValidationError::EmployeeNotSelected);
}

#[test]
fn applications_follow_the_posting() {
    let mut hr = module(34);
    let job = hr.recruitment.jobs(None).unwrap()[0].clone();

    let draft = CandidateDraft {
        job_id: job.id,
        first_name: "Tomas".into(),
        last_name: "Berg".into(),
        email: "tomas.berg@example.com".into(),
        phone: "+1-555-222-3333".into(),
        resume: "Berg_Resume.pdf".into(),
        experience: 6,
        skills: vec!["Lean".into()],
        notes: None,
    };
    let candidate = hr
        .recruitment
        .add_candidate(draft.clone(), today())
        .unwrap();
    assert_eq!(candidate.job_title, job.title);
    assert_eq!(candidate.status, CandidateStatus::Applied);

    let refreshed = hr
        .recruitment
        .jobs(None)
        .unwrap()
        .into_iter()
        .find(|j| j.id == job.id)
        .unwrap();
    assert_eq!(refreshed.applications, job.applications + 1);

    let missing = Uuid::new_v4();
    let err = hr
        .recruitment
        .add_candidate(CandidateDraft { job_id: missing, ..draft }, today())
        .unwrap_err();
    assert_eq!(rejection(err), ValidationError::UnknownJob(missing));
}

#[test]
fn processing_a_period_clears_its_drafts() {
    let mut hr = module(55);
    let period = hr
        .payroll
        .draft_periods()
        .unwrap()
        .first()
        .cloned()
        .expect("seed 55 yields a draft period");
    let processed_before = hr.payroll.processed_count().unwrap();

    let changed = hr.payroll.process_period(&period).unwrap();
    assert!(changed > 0);
    assert_eq!(hr.payroll.processed_count().unwrap(), processed_before + changed);
    let drafts_left = hr
        .payroll
        .list(&PayrollFilter {
            status: Some(PayrollStatus::Draft),
            period: Some(period.clone()),
        })
        .unwrap();
    assert!(drafts_left.is_empty());
    assert!(!hr.payroll.draft_periods().unwrap().contains(&period));
}
