use chrono::{Duration, Months};
use entity::{Department, EmergencyContact, Employee, EmploymentStatus, Gender};
use rand::Rng;

use super::{DatasetBuilder, vocab};

impl DatasetBuilder {
    pub fn employees(&mut self, count: usize) -> Vec<Employee> {
        (0..count).map(|_| self.employee()).collect()
    }

    fn employee(&mut self) -> Employee {
        let gender = self.pick_variant(&[Gender::Male, Gender::Female]);
        let first_name = self.first_name(gender);
        let last_name = self.last_name();
        let email = self.email(&first_name, &last_name);
        let department = self.pick_variant(Department::ALL);
        let position = self.pick(department.positions()).to_string();

        Employee {
            id: self.uuid(),
            phone: self.phone(),
            hire_date: self.past_day(3650),
            salary: self.rng.gen_range(30_000..=120_000),
            status: self.pick_variant(EmploymentStatus::ALL),
            address: self.street_address(),
            emergency_contact: EmergencyContact {
                name: self.person_name(),
                phone: self.phone(),
                relationship: self.pick(vocab::RELATIONSHIPS).to_string(),
            },
            skills: self.pick_some(vocab::EMPLOYEE_SKILLS, 2, 5),
            certifications: self.pick_some(vocab::CERTIFICATIONS, 1, 3),
            gender: Some(gender),
            date_of_birth: Some(self.birth_date()),
            first_name,
            last_name,
            email,
            department,
            position,
        }
    }

    /// A birth date putting the employee between 18 and 65 years old today.
    fn birth_date(&mut self) -> chrono::NaiveDate {
        let today = self.today();
        let years: u32 = self.rng.gen_range(18..=65);
        let anniversary = today
            .checked_sub_months(Months::new(years * 12))
            .unwrap_or(today - Duration::days(i64::from(years) * 366));
        anniversary - Duration::days(self.rng.gen_range(0..=364))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::fixed_now;
    use super::*;

    #[test]
    fn employees_hold_positions_of_their_department() {
        let mut builder = DatasetBuilder::new(Some(5)).at(fixed_now());
        for employee in builder.employees(200) {
            assert!(employee.holds_valid_position(), "{employee:?}");
            assert!((30_000..=120_000).contains(&employee.salary));
            assert!((2..=5).contains(&employee.skills.len()));
            assert!((1..=3).contains(&employee.certifications.len()));
        }
    }

    #[test]
    fn ages_and_hire_dates_stay_in_range() {
        let now = fixed_now();
        let today = now.date_naive();
        let mut builder = DatasetBuilder::new(Some(9)).at(now);
        for employee in builder.employees(200) {
            let age = employee.age_on(today).unwrap();
            assert!((18..=65).contains(&age), "age {age}");
            assert!(employee.hire_date < today);
            assert!(employee.hire_date >= today - Duration::days(3650));
        }
    }

    #[test]
    fn emails_derive_from_names() {
        let mut builder = DatasetBuilder::new(Some(2));
        let employee = builder.employee();
        let prefix = format!(
            "{}.{}",
            employee.first_name.to_lowercase(),
            employee.last_name.to_lowercase()
        );
        assert!(employee.email.starts_with(&prefix));
    }
}
