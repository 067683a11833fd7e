mod summary;
pub mod views;

pub use summary::{DashboardReport, RetirementCandidate};

use super::age::RetirementPolicy;
use super::domain::Employee;
use super::reference::Department;
use chrono::NaiveDate;
use views::DashboardSummary;

/// Dashboard statistics for a snapshot, using the statutory retirement ages.
pub fn aggregate(
    records: &[Employee],
    departments: &[Department],
    evaluation_date: NaiveDate,
) -> DashboardSummary {
    aggregate_with_policy(
        records,
        departments,
        evaluation_date,
        &RetirementPolicy::default(),
    )
}

pub fn aggregate_with_policy(
    records: &[Employee],
    departments: &[Department],
    evaluation_date: NaiveDate,
    policy: &RetirementPolicy,
) -> DashboardSummary {
    DashboardReport::build(records, evaluation_date, policy).summary(departments)
}
