use serde::Serialize;

use super::domain::{Employee, EmployeeId, EmployeeStatus, Gender};
use super::reference::ReferenceCatalog;

/// Storage abstraction owning the canonical roster for one session.
pub trait EmployeeRepository: Send + Sync {
    fn insert(&self, record: Employee) -> Result<Employee, RepositoryError>;
    fn replace(&self, record: Employee) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError>;
    /// Every stored record, in insertion order.
    fn snapshot(&self) -> Result<Vec<Employee>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// One line of the roster list with references resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntryView {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub gender: Gender,
    pub gender_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    pub department_name: String,
    pub position_name: String,
    pub phone_number: String,
    pub status: EmployeeStatus,
    pub status_label: &'static str,
}

impl RosterEntryView {
    pub fn new(employee: &Employee, catalog: &ReferenceCatalog) -> Self {
        Self {
            employee_id: employee.id.clone(),
            full_name: employee.full_name.clone(),
            gender: employee.gender,
            gender_label: employee.gender.label(),
            birth_year: employee.birth_year(),
            department_name: catalog.department_name(&employee.department_id).to_string(),
            position_name: catalog.position_name(&employee.position_id).to_string(),
            phone_number: employee.phone_number.clone(),
            status: employee.status,
            status_label: employee.status.label(),
        }
    }
}
