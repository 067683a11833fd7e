use std::sync::Mutex;

use chrono::NaiveDate;

use crate::personnel::domain::{Employee, EmployeeId, EmploymentType, Gender};
use crate::personnel::reference::ReferenceCatalog;
use crate::personnel::repository::{EmployeeRepository, RepositoryError};

pub(super) fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

pub(super) fn catalog() -> ReferenceCatalog {
    ReferenceCatalog::standard()
}

/// A record that passes required-field validation.
pub(super) fn employee(id: &str, name: &str, dob: &str, gender: Gender) -> Employee {
    let mut employee = Employee::blank(&catalog());
    employee.id = EmployeeId(id.to_string());
    employee.full_name = name.to_string();
    employee.date_of_birth = dob.to_string();
    employee.gender = gender;
    employee.phone_number = "0912000000".to_string();
    employee.id_card_number = format!("0010{id}");
    employee.id_card_issue_date = "2021-07-01".to_string();
    employee.recruitment_date = "2010-09-01".to_string();
    employee
}

pub(super) fn ward_roster() -> Vec<Employee> {
    let mut director = employee("EMP001", "Nguyễn Văn An", "1966-03-10", Gender::Male);
    director.department_id = "khth".to_string();
    director.position_id = "gd".to_string();
    director.employment_type = EmploymentType::PermanentCivilService;
    director.highest_specialization = Some("Thạc sĩ CKII Nội khoa".to_string());

    let mut head_nurse = employee("EMP002", "Trần Thị Bình", "1964-09-15", Gender::Female);
    head_nurse.department_id = "noi".to_string();
    head_nurse.position_id = "ddt".to_string();
    head_nurse.employment_type = EmploymentType::PermanentCivilService;
    head_nurse.highest_specialization = Some("Cử nhân Điều dưỡng".to_string());

    let mut doctor = employee("EMP003", "Lê Hoàng Cường", "1989-11-02", Gender::Male);
    doctor.department_id = "noi".to_string();
    doctor.position_id = "bs".to_string();
    doctor.employment_type = EmploymentType::QuotaContract;
    doctor.highest_specialization = Some("BS CKI Nội".to_string());

    let mut nurse = employee("EMP004", "Phạm Thu Dung", "1998-05-20", Gender::Female);
    nurse.department_id = "nhi".to_string();
    nurse.position_id = "dd".to_string();
    nurse.employment_type = EmploymentType::SupportService;
    nurse.highest_specialization = Some("CĐ Điều dưỡng".to_string());

    let mut driver = employee("EMP005", "Võ Văn Em", "", Gender::Male);
    driver.department_id = "tchc".to_string();
    driver.position_id = "nv".to_string();
    driver.employment_type = EmploymentType::Piecework;

    vec![director, head_nurse, doctor, nurse, driver]
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<Vec<Employee>>,
}

impl MemoryRepository {
    pub(super) fn seeded(records: Vec<Employee>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl EmployeeRepository for MemoryRepository {
    fn insert(&self, record: Employee) -> Result<Employee, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn replace(&self, record: Employee) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == record.id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn snapshot(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }
}
