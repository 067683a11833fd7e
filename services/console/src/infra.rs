use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;
use ttyt_hrm::config::AppConfig;
use ttyt_hrm::error::AppError;
use ttyt_hrm::personnel::{
    Employee, EmployeeId, EmployeeRepository, PersonnelService, ReferenceCatalog,
    RepositoryError, RosterImporter,
};

/// Session-scoped record store. Insertion order is the roster order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryEmployeeRepository {
    records: Arc<Mutex<Vec<Employee>>>,
}

impl InMemoryEmployeeRepository {
    pub(crate) fn seeded(records: Vec<Employee>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Employee>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn insert(&self, record: Employee) -> Result<Employee, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn replace(&self, record: Employee) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        match guard.iter_mut().find(|existing| existing.id == record.id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn snapshot(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.lock()?.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RosterSource {
    File(PathBuf),
    Sample,
}

impl RosterSource {
    pub(crate) fn describe(&self) -> String {
        match self {
            RosterSource::File(path) => format!("roster CSV {}", path.display()),
            RosterSource::Sample => "built-in sample roster".to_string(),
        }
    }
}

/// `--roster` wins over `HRM_ROSTER_CSV`; with neither the sample roster is used.
pub(crate) fn load_roster(
    roster: Option<PathBuf>,
    config: &AppConfig,
) -> Result<(Vec<Employee>, RosterSource), AppError> {
    let source = match roster.or_else(|| config.roster.seed_csv.clone()) {
        Some(path) => RosterSource::File(path),
        None => RosterSource::Sample,
    };

    let records = match &source {
        RosterSource::File(path) => RosterImporter::from_path(path)?,
        RosterSource::Sample => RosterImporter::sample()?,
    };
    info!(records = records.len(), source = %source.describe(), "roster loaded");
    Ok((records, source))
}

pub(crate) fn personnel_service(
    records: Vec<Employee>,
    config: &AppConfig,
) -> PersonnelService<InMemoryEmployeeRepository> {
    PersonnelService::with_policy(
        Arc::new(InMemoryEmployeeRepository::seeded(records)),
        Arc::new(ReferenceCatalog::standard()),
        config.roster.retirement,
    )
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
