use super::super::age::AgeBand;
use super::super::domain::{EmployeeId, Gender};
use super::super::qualification::QualificationBucket;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadcountTotals {
    pub total: usize,
    pub active: usize,
    pub permanent: usize,
    pub non_permanent: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentHeadcountEntry {
    pub department_id: String,
    pub department_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualificationEntry {
    pub bucket: QualificationBucket,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBandEntry {
    pub band: AgeBand,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetirementCandidateView {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub gender: Gender,
    pub gender_label: &'static str,
    pub age_months: u32,
    /// Completed years, always below `retirement_age`.
    pub age_years: u32,
    pub retirement_age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retirement_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub evaluation_date: NaiveDate,
    pub totals: HeadcountTotals,
    pub departments: Vec<DepartmentHeadcountEntry>,
    pub qualifications: Vec<QualificationEntry>,
    pub age_bands: Vec<AgeBandEntry>,
    pub retirement_candidates: Vec<RetirementCandidateView>,
    /// Records whose date of birth could not be read.
    pub unknown_birth_dates: usize,
}
