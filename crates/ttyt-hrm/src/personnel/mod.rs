//! Personnel register: record model, dashboard aggregation, and roster filtering.
//!
//! `report::aggregate` and `filter::filter` are pure functions over a snapshot of
//! records. `PersonnelService` owns the mutable roster and hands snapshots to them.

pub mod age;
pub mod domain;
pub mod filter;
pub mod import;
pub mod qualification;
pub mod reference;
pub mod report;
pub mod repository;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use age::{AgeBand, AgeReading, RetirementPolicy};
pub use domain::{
    DecisionDocument, Employee, EmployeeId, EmployeeStatus, EmploymentType,
    ForeignLanguageSkills, Gender, InformaticsTraining, OtherCertificates,
    PoliticalTheoryTraining, StateManagementTraining, WorkHistoryEvent,
};
pub use filter::{filter, RosterQuery};
pub use import::{RosterImportError, RosterImporter, SAMPLE_ROSTER_CSV};
pub use qualification::{QualificationBucket, QUALIFICATION_RULES};
pub use reference::{Department, Position, ReferenceCatalog, UNRESOLVED_REFERENCE};
pub use report::{aggregate, aggregate_with_policy, DashboardReport};
pub use repository::{EmployeeRepository, RepositoryError, RosterEntryView};
pub use service::{PersonnelService, PersonnelServiceError};
pub use validation::{validate_required, ValidationError};
