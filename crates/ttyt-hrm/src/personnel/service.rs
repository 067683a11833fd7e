use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use super::age::RetirementPolicy;
use super::domain::{Employee, EmployeeId, EmployeeStatus};
use super::filter::RosterQuery;
use super::reference::ReferenceCatalog;
use super::report::{aggregate_with_policy, views::DashboardSummary};
use super::repository::{EmployeeRepository, RepositoryError, RosterEntryView};
use super::validation::{validate_required, ValidationError};

/// Application shell around the record store: mutations go through here,
/// reads hand an immutable snapshot to the aggregator or the filter.
pub struct PersonnelService<R> {
    repository: Arc<R>,
    catalog: Arc<ReferenceCatalog>,
    policy: RetirementPolicy,
}

static EMPLOYEE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_employee_id() -> EmployeeId {
    let sequence = EMPLOYEE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    EmployeeId(format!(
        "EMP{}{:03}",
        Utc::now().timestamp_millis(),
        sequence % 1000
    ))
}

impl<R> PersonnelService<R>
where
    R: EmployeeRepository + 'static,
{
    pub fn new(repository: Arc<R>, catalog: Arc<ReferenceCatalog>) -> Self {
        Self::with_policy(repository, catalog, RetirementPolicy::default())
    }

    pub fn with_policy(
        repository: Arc<R>,
        catalog: Arc<ReferenceCatalog>,
        policy: RetirementPolicy,
    ) -> Self {
        Self {
            repository,
            catalog,
            policy,
        }
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &RetirementPolicy {
        &self.policy
    }

    /// Store a new record under a freshly generated id. Any id on the input
    /// is discarded.
    pub fn create(&self, mut employee: Employee) -> Result<Employee, PersonnelServiceError> {
        validate_required(&employee)?;
        employee.id = next_employee_id();

        let stored = self.repository.insert(employee)?;
        info!(employee_id = %stored.id, status = stored.status.key(), "employee record created");
        Ok(stored)
    }

    /// Full replacement keyed on the record's id.
    pub fn update(&self, employee: Employee) -> Result<Employee, PersonnelServiceError> {
        validate_required(&employee)?;
        self.repository.replace(employee.clone())?;
        info!(employee_id = %employee.id, "employee record updated");
        Ok(employee)
    }

    /// Soft delete: the record stays in the roster with an inactive status.
    pub fn deactivate(&self, id: &EmployeeId) -> Result<Employee, PersonnelServiceError> {
        let mut record = self.get(id)?;
        if record.status == EmployeeStatus::inactive() {
            debug!(employee_id = %id, "employee record already inactive");
            return Ok(record);
        }

        record.status = EmployeeStatus::inactive();
        self.repository.replace(record.clone())?;
        info!(employee_id = %id, "employee record deactivated");
        Ok(record)
    }

    pub fn get(&self, id: &EmployeeId) -> Result<Employee, PersonnelServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn snapshot(&self) -> Result<Vec<Employee>, PersonnelServiceError> {
        Ok(self.repository.snapshot()?)
    }

    pub fn dashboard(&self, today: NaiveDate) -> Result<DashboardSummary, PersonnelServiceError> {
        let records = self.snapshot()?;
        Ok(aggregate_with_policy(
            &records,
            self.catalog.departments(),
            today,
            &self.policy,
        ))
    }

    pub fn search(&self, query: &RosterQuery) -> Result<Vec<RosterEntryView>, PersonnelServiceError> {
        let records = self.snapshot()?;
        Ok(query
            .apply(&records)
            .into_iter()
            .map(|employee| RosterEntryView::new(employee, &self.catalog))
            .collect())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersonnelServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
