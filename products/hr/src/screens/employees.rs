use chrono::NaiveDate;
use entity::{Department, EmergencyContact, Employee, EmploymentStatus, Gender};
use platform_api::{ApiResult, ValidationError};
use platform_db::{InMemoryRepository, Repository};
use uuid::Uuid;

use super::require;
use crate::csv_io::{self, CsvExport};

/// The fields an operator fills in on the add/edit form.
#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeDraft {
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
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
}

impl EmployeeDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.first_name, "firstName")?;
        require(&self.last_name, "lastName")?;
        if !self.department.holds_position(&self.position) {
            return Err(ValidationError::PositionNotInDepartment {
                department: self.department.to_string(),
                position: self.position.clone(),
            });
        }
        Ok(())
    }

    pub fn into_employee(self, id: Uuid) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            department: self.department,
            position: self.position,
            hire_date: self.hire_date,
            salary: self.salary,
            status: self.status,
            address: self.address,
            emergency_contact: self.emergency_contact,
            skills: self.skills,
            certifications: self.certifications,
            gender: self.gender,
            date_of_birth: self.date_of_birth,
        }
    }
}

impl From<Employee> for EmployeeDraft {
    fn from(employee: Employee) -> Self {
        Self {
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            phone: employee.phone,
            department: employee.department,
            position: employee.position,
            hire_date: employee.hire_date,
            salary: employee.salary,
            status: employee.status,
            address: employee.address,
            emergency_contact: employee.emergency_contact,
            skills: employee.skills,
            certifications: employee.certifications,
            gender: employee.gender,
            date_of_birth: employee.date_of_birth,
        }
    }
}

/// What the employee modal was opened for.
#[derive(Clone, Debug, PartialEq)]
pub enum EmployeeForm {
    Add(EmployeeDraft),
    Edit(Uuid, EmployeeDraft),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Case-insensitive match on full name, email or position.
    pub search: String,
    pub department: Option<Department>,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        let needle = self.search.to_lowercase();
        let found = employee.full_name().to_lowercase().contains(&needle)
            || employee.email.to_lowercase().contains(&needle)
            || employee.position.to_lowercase().contains(&needle);
        found && self.department.is_none_or(|department| employee.department == department)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported(usize),
    NoData,
}

pub struct EmployeeScreen<R = InMemoryRepository<Employee>> {
    repo: R,
}

impl<R: Repository<Employee>> EmployeeScreen<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn employees(&self) -> ApiResult<Vec<Employee>> {
        Ok(self.repo.all()?)
    }

    pub fn list(&self, filter: &EmployeeFilter) -> ApiResult<Vec<Employee>> {
        Ok(self
            .repo
            .all()?
            .into_iter()
            .filter(|employee| filter.matches(employee))
            .collect())
    }

    /// Departments present in the current list, in declaration order.
    pub fn departments(&self) -> ApiResult<Vec<Department>> {
        let mut departments: Vec<_> = self.repo.all()?.iter().map(|e| e.department).collect();
        departments.sort();
        departments.dedup();
        Ok(departments)
    }

    pub fn view(&self, id: Uuid) -> ApiResult<Employee> {
        Ok(self.repo.get(id)?)
    }

    pub fn submit(&mut self, form: EmployeeForm) -> ApiResult<Employee> {
        match form {
            EmployeeForm::Add(draft) => {
                draft.validate()?;
                let employee = draft.into_employee(Uuid::new_v4());
                self.repo.prepend(employee.clone())?;
                tracing::info!(employee_id = %employee.id, "employee added");
                Ok(employee)
            }
            EmployeeForm::Edit(id, draft) => {
                self.repo.get(id)?;
                draft.validate()?;
                let employee = draft.into_employee(id);
                self.repo.replace(employee.clone())?;
                tracing::info!(employee_id = %id, "employee updated");
                Ok(employee)
            }
        }
    }

    pub fn delete(&mut self, id: Uuid) -> ApiResult<Employee> {
        let removed = self.repo.remove(id)?;
        tracing::info!(employee_id = %id, "employee deleted");
        Ok(removed)
    }

    pub fn export(&self, filter: &EmployeeFilter) -> ApiResult<CsvExport> {
        let employees = self.list(filter)?;
        csv_io::export_employees(&employees)
    }

    /// Appends every usable row of `text`. Nothing is stored when the file is
    /// rejected.
    pub fn import(&mut self, text: &str, today: NaiveDate) -> ApiResult<ImportOutcome> {
        let imported = csv_io::import_employees(text, today)?;
        if imported.is_empty() {
            tracing::info!("employee import found no usable rows");
            return Ok(ImportOutcome::NoData);
        }
        let count = self.repo.append(imported)?;
        tracing::info!(count, "employees imported");
        Ok(ImportOutcome::Imported(count))
    }
}
