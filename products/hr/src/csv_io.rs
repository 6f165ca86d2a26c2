//! CSV export for the employee, attendance and payroll lists, and the
//! employee import.
//!
//! Export wraps every text field in double quotes (embedded quotes doubled)
//! and writes numbers bare. Import splits each line on commas without
//! honouring quotes and then strips every quote character, so a quoted
//! comma in an exported file does not survive a round trip.

use anyhow::Context;
use chrono::NaiveDate;
use csv::{QuoteStyle, ReaderBuilder, Terminator, Trim, WriterBuilder};
use entity::{AttendanceRecord, Department, EmergencyContact, Employee, EmploymentStatus, PayrollRecord};
use platform_api::{ApiResult, ValidationError};
use uuid::Uuid;

use crate::screens::EmployeeDraft;

pub const EMPLOYEES_FILE: &str = "employees.csv";
pub const ATTENDANCE_FILE: &str = "attendance_report.csv";
pub const PAYROLL_FILE: &str = "payroll_report.csv";

const EMPLOYEE_HEADER: [&str; 16] = [
    "id",
    "firstName",
    "lastName",
    "email",
    "phone",
    "department",
    "position",
    "hireDate",
    "salary",
    "status",
    "address",
    "emergencyContactName",
    "emergencyContactPhone",
    "emergencyContactRelationship",
    "skills",
    "certifications",
];

const ATTENDANCE_HEADER: [&str; 9] = [
    "id",
    "employeeId",
    "employeeName",
    "date",
    "checkIn",
    "checkOut",
    "totalHours",
    "status",
    "location",
];

const PAYROLL_HEADER: [&str; 12] = [
    "id",
    "employeeId",
    "employeeName",
    "period",
    "baseSalary",
    "overtime",
    "bonuses",
    "deductions",
    "grossPay",
    "netPay",
    "status",
    "payDate",
];

const LIST_SEPARATOR: &str = ";";

/// A rendered file together with the name it is offered under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub contents: String,
}

fn quoted(value: impl AsRef<str>) -> String {
    format!("\"{}\"", value.as_ref().replace('"', "\"\""))
}

fn render<I>(file_name: &'static str, header: &[&str], rows: I) -> ApiResult<CsvExport>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer
        .write_record(header)
        .context("writing csv header")?;
    for row in rows {
        writer.write_record(&row).context("writing csv row")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("flushing csv buffer: {err}"))?;
    let contents = String::from_utf8(bytes).context("csv output is not utf-8")?;
    Ok(CsvExport {
        file_name,
        contents,
    })
}

pub fn export_employees(employees: &[Employee]) -> ApiResult<CsvExport> {
    let rows = employees.iter().map(|e| {
        vec![
            quoted(e.id.to_string()),
            quoted(&e.first_name),
            quoted(&e.last_name),
            quoted(&e.email),
            quoted(&e.phone),
            quoted(e.department.as_str()),
            quoted(&e.position),
            quoted(e.hire_date.to_string()),
            e.salary.to_string(),
            quoted(e.status.as_str()),
            quoted(&e.address),
            quoted(&e.emergency_contact.name),
            quoted(&e.emergency_contact.phone),
            quoted(&e.emergency_contact.relationship),
            quoted(e.skills.join(LIST_SEPARATOR)),
            quoted(e.certifications.join(LIST_SEPARATOR)),
        ]
    });
    render(EMPLOYEES_FILE, &EMPLOYEE_HEADER, rows)
}

pub fn export_attendance(records: &[AttendanceRecord]) -> ApiResult<CsvExport> {
    let rows = records.iter().map(|r| {
        vec![
            quoted(r.id.to_string()),
            quoted(r.employee_id.to_string()),
            quoted(&r.employee_name),
            quoted(r.date.to_string()),
            quoted(r.check_in.format("%H:%M").to_string()),
            quoted(
                r.check_out
                    .map(|time| time.format("%H:%M").to_string())
                    .unwrap_or_default(),
            ),
            r.total_hours.to_string(),
            quoted(r.status.as_str()),
            quoted(&r.location),
        ]
    });
    render(ATTENDANCE_FILE, &ATTENDANCE_HEADER, rows)
}

pub fn export_payroll(records: &[PayrollRecord]) -> ApiResult<CsvExport> {
    let rows = records.iter().map(|r| {
        vec![
            quoted(r.id.to_string()),
            quoted(r.employee_id.to_string()),
            quoted(&r.employee_name),
            quoted(&r.period),
            r.base_salary.to_string(),
            r.overtime.to_string(),
            r.bonuses.to_string(),
            r.deductions.to_string(),
            r.gross_pay.to_string(),
            r.net_pay.to_string(),
            quoted(r.status.as_str()),
            quoted(r.pay_date.map(|day| day.to_string()).unwrap_or_default()),
        ]
    });
    render(PAYROLL_FILE, &PAYROLL_HEADER, rows)
}

/// Header names the import understands. Anything else rejects the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ImportColumn {
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
    HireDate,
    Salary,
    Status,
    Address,
    EmergencyContactName,
    EmergencyContactPhone,
    EmergencyContactRelationship,
    Skills,
    Certifications,
}

impl ImportColumn {
    fn parse(name: &str) -> Option<Self> {
        let column = match name {
            "id" => Self::Id,
            "firstName" => Self::FirstName,
            "lastName" => Self::LastName,
            "email" => Self::Email,
            "phone" => Self::Phone,
            "department" => Self::Department,
            "position" => Self::Position,
            "hireDate" => Self::HireDate,
            "salary" => Self::Salary,
            "status" => Self::Status,
            "address" => Self::Address,
            "emergencyContactName" => Self::EmergencyContactName,
            "emergencyContactPhone" => Self::EmergencyContactPhone,
            "emergencyContactRelationship" => Self::EmergencyContactRelationship,
            "skills" => Self::Skills,
            "certifications" => Self::Certifications,
            _ => return None,
        };
        Some(column)
    }
}

/// Values collected from one data line before defaults are applied.
#[derive(Default)]
struct ImportedRow {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    department: Option<Department>,
    position: Option<String>,
    hire_date: Option<NaiveDate>,
    salary: Option<u32>,
    status: Option<EmploymentStatus>,
    address: Option<String>,
    emergency_contact: EmergencyContact,
    skills: Vec<String>,
    certifications: Vec<String>,
}

impl ImportedRow {
    fn set(&mut self, column: ImportColumn, value: String) -> Result<(), ValidationError> {
        match column {
            // Imported employees always get a fresh id.
            ImportColumn::Id => {}
            ImportColumn::FirstName => self.first_name = Some(value),
            ImportColumn::LastName => self.last_name = Some(value),
            ImportColumn::Email => self.email = Some(value),
            ImportColumn::Phone => self.phone = Some(value),
            ImportColumn::Department => {
                self.department =
                    Some(Department::parse(&value).ok_or_else(|| invalid("department", &value))?)
            }
            ImportColumn::Position => self.position = Some(value),
            ImportColumn::HireDate => {
                let day = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .map_err(|_| invalid("hireDate", &value))?;
                self.hire_date = Some(day);
            }
            ImportColumn::Salary => {
                self.salary = Some(value.parse().map_err(|_| invalid("salary", &value))?)
            }
            ImportColumn::Status => {
                self.status = Some(
                    EmploymentStatus::parse(&value).ok_or_else(|| invalid("status", &value))?,
                )
            }
            ImportColumn::Address => self.address = Some(value),
            ImportColumn::EmergencyContactName => self.emergency_contact.name = value,
            ImportColumn::EmergencyContactPhone => self.emergency_contact.phone = value,
            ImportColumn::EmergencyContactRelationship => {
                self.emergency_contact.relationship = value
            }
            ImportColumn::Skills => self.skills = split_list(&value),
            ImportColumn::Certifications => self.certifications = split_list(&value),
        }
        Ok(())
    }

    /// `None` when the line has no first or last name.
    fn into_draft(self, today: NaiveDate) -> Option<EmployeeDraft> {
        let first_name = self.first_name?;
        let last_name = self.last_name?;
        let department = self
            .department
            .or_else(|| {
                let position = self.position.as_deref()?;
                Department::ALL
                    .iter()
                    .copied()
                    .find(|department| department.holds_position(position))
            })
            .unwrap_or(Department::Hr);
        let position = self.position.unwrap_or_else(|| {
            department
                .positions()
                .first()
                .map(|position| position.to_string())
                .unwrap_or_default()
        });
        Some(EmployeeDraft {
            first_name,
            last_name,
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            department,
            position,
            hire_date: self.hire_date.unwrap_or(today),
            salary: self.salary.unwrap_or(0),
            status: self.status.unwrap_or(EmploymentStatus::Active),
            address: self.address.unwrap_or_default(),
            emergency_contact: self.emergency_contact,
            skills: self.skills,
            certifications: self.certifications,
            gender: None,
            date_of_birth: None,
        })
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn invalid(column: &str, value: &str) -> ValidationError {
    ValidationError::MalformedImport(format!("invalid {column} `{value}`"))
}

fn malformed(err: csv::Error) -> ValidationError {
    ValidationError::MalformedImport(err.to_string())
}

fn unquote(raw: &str) -> String {
    raw.replace('"', "")
}

/// Parses an employee file. Lines without a first or last name are skipped;
/// any other problem rejects the whole file.
pub fn import_employees(text: &str, today: NaiveDate) -> ApiResult<Vec<Employee>> {
    let text = text.trim_start_matches('\u{FEFF}').trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let header = reader.headers().map_err(malformed)?.clone();
    if header.len() < 2 {
        return Err(ValidationError::MalformedImport("invalid csv header".into()).into());
    }
    // Blank header cells (a trailing comma) carry no column; their values are dropped.
    let columns = header
        .iter()
        .map(|name| {
            let name = unquote(name);
            if name.is_empty() {
                return Ok(None);
            }
            ImportColumn::parse(&name)
                .map(Some)
                .ok_or_else(|| ValidationError::MalformedImport(format!("unknown column `{name}`")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut employees = Vec::new();
    for (index, line) in reader.records().enumerate() {
        let line = line.map_err(malformed)?;
        let mut row = ImportedRow::default();
        for (column, raw) in columns.iter().zip(line.iter()) {
            let Some(column) = column else { continue };
            let value = unquote(raw);
            if !value.is_empty() {
                row.set(*column, value)?;
            }
        }
        if let Some(draft) = row.into_draft(today) {
            // Line 1 is the header.
            let line_number = index + 2;
            draft.validate().map_err(|err| {
                ValidationError::MalformedImport(format!("line {line_number}: {err}"))
            })?;
            employees.push(draft.into_employee(Uuid::new_v4()));
        }
    }

    tracing::debug!(rows = employees.len(), "parsed employee import");
    Ok(employees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use entity::{AttendanceStatus, PayrollStatus};
    use platform_api::ApiError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn malformed_reason(err: ApiError) -> String {
        match err.validation() {
            Some(ValidationError::MalformedImport(reason)) => reason.clone(),
            other => panic!("expected malformed import, got {other:?}"),
        }
    }

    #[test]
    fn quotes_text_and_leaves_numbers_bare() {
        let record = PayrollRecord {
            id: Uuid::nil(),
            employee_id: Uuid::nil(),
            employee_name: "Ada \"The Countess\" Lovelace".into(),
            period: "2025-03".into(),
            base_salary: 5416.67,
            overtime: 120.5,
            bonuses: 0.0,
            deductions: 412.25,
            gross_pay: 5537.17,
            net_pay: 5124.92,
            status: PayrollStatus::Draft,
            pay_date: None,
        };
        let export = export_payroll(&[record]).unwrap();
        assert_eq!(export.file_name, "payroll_report.csv");
        let mut lines = export.contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,employeeId,employeeName,period,baseSalary,overtime,bonuses,deductions,grossPay,netPay,status,payDate"
        );
        let nil = Uuid::nil();
        assert_eq!(
            lines.next().unwrap(),
            format!(
                "\"{nil}\",\"{nil}\",\"Ada \"\"The Countess\"\" Lovelace\",\"2025-03\",5416.67,120.5,0,412.25,5537.17,5124.92,\"draft\",\"\""
            )
        );
    }

    #[test]
    fn open_attendance_exports_empty_check_out() {
        let record = AttendanceRecord {
            id: Uuid::nil(),
            employee_id: Uuid::nil(),
            employee_name: "Ada Lovelace".into(),
            date: today(),
            check_in: NaiveTime::from_hms_opt(8, 5, 0).unwrap(),
            check_out: None,
            total_hours: 0.0,
            status: AttendanceStatus::Present,
            location: "Main Factory".into(),
        };
        let export = export_attendance(&[record]).unwrap();
        assert_eq!(export.file_name, "attendance_report.csv");
        let row = export.contents.lines().nth(1).unwrap();
        assert!(row.ends_with(",\"2025-03-14\",\"08:05\",\"\",0,\"present\",\"Main Factory\""));
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let export = export_employees(&[]).unwrap();
        assert_eq!(export.contents, format!("{}\n", EMPLOYEE_HEADER.join(",")));
    }

    #[test]
    fn import_applies_defaults() {
        let text = "firstName,lastName,salary,skills\n\"Grace\",\"Hopper\",91000,\"COBOL;Leadership\"\n";
        let employees = import_employees(text, today()).unwrap();
        assert_eq!(employees.len(), 1);
        let grace = &employees[0];
        assert_eq!(grace.full_name(), "Grace Hopper");
        assert_eq!(grace.salary, 91_000);
        assert_eq!(grace.skills, vec!["COBOL", "Leadership"]);
        assert_eq!(grace.department, Department::Hr);
        assert_eq!(grace.position, "HR Manager");
        assert_eq!(grace.status, EmploymentStatus::Active);
        assert_eq!(grace.hire_date, today());
    }

    #[test]
    fn rows_without_both_names_are_skipped() {
        let text = "firstName,lastName,email\nAda,,ada@example.com\n";
        assert!(import_employees(text, today()).unwrap().is_empty());
    }

    #[test]
    fn single_column_header_is_rejected() {
        let err = import_employees("firstName\nAda\n", today()).unwrap_err();
        assert_eq!(malformed_reason(err), "invalid csv header");
    }

    #[test]
    fn unknown_columns_reject_the_file() {
        let err = import_employees("firstName,lastName,isAdmin\nAda,Lovelace,yes\n", today())
            .unwrap_err();
        assert!(malformed_reason(err).contains("isAdmin"));
    }

    #[test]
    fn bad_typed_values_reject_the_file() {
        let err = import_employees("firstName,lastName,salary\nAda,Lovelace,lots\n", today())
            .unwrap_err();
        assert!(malformed_reason(err).contains("salary"));
    }

    #[test]
    fn quoted_commas_split_the_value() {
        let text = "firstName,lastName,address\n\"Ada\",\"Lovelace\",\"1 Main St, Springfield\"\n";
        let employees = import_employees(text, today()).unwrap();
        assert_eq!(employees[0].address, "1 Main St");
    }

    #[test]
    fn department_follows_the_imported_position() {
        let text = "firstName,lastName,position\nAda,Lovelace,Developer\nAlan,Turing,HR Manager\n";
        let employees = import_employees(text, today()).unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].department, Department::It);
        assert_eq!(employees[0].position, "Developer");
        assert_eq!(employees[1].department, Department::Hr);
    }

    #[test]
    fn mismatched_position_names_the_line() {
        let text = "firstName,lastName,department,position\nAda,Lovelace,it,Developer\nAlan,Turing,finance,Developer\n";
        let reason = malformed_reason(import_employees(text, today()).unwrap_err());
        assert!(reason.starts_with("line 3:"), "{reason}");
        assert!(reason.contains("Developer"));
    }

    #[test]
    fn trailing_comma_in_header_is_ignored() {
        let text = "firstName,lastName,email,\nAda,Lovelace,ada@example.com,\n";
        let employees = import_employees(text, today()).unwrap();
        assert_eq!(employees[0].email, "ada@example.com");
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(import_employees("  \n", today()).unwrap().is_empty());
    }
}
