use super::super::age::{calendar_age, AgeBand, AgeReading, RetirementPolicy};
use super::super::domain::{Employee, EmployeeId, Gender};
use super::super::qualification::{classify_employee, QualificationBucket};
use super::super::reference::Department;
use super::views::{
    AgeBandEntry, DashboardSummary, DepartmentHeadcountEntry, HeadcountTotals,
    QualificationEntry, RetirementCandidateView,
};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Raw tallies over one snapshot. `summary` orders and labels them.
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub evaluation_date: NaiveDate,
    pub totals: HeadcountTotals,
    pub department_counts: HashMap<String, usize>,
    pub qualification_counts: [usize; 6],
    pub age_counts: [usize; 5],
    pub retirement_candidates: Vec<RetirementCandidate>,
    pub unknown_birth_dates: usize,
}

impl DashboardReport {
    pub fn build(
        records: &[Employee],
        evaluation_date: NaiveDate,
        policy: &RetirementPolicy,
    ) -> Self {
        let mut report = Self {
            evaluation_date,
            totals: HeadcountTotals::default(),
            department_counts: HashMap::new(),
            qualification_counts: [0; 6],
            age_counts: [0; 5],
            retirement_candidates: Vec::new(),
            unknown_birth_dates: 0,
        };

        for employee in records {
            report.record(employee, policy);
        }

        report.totals.non_permanent = report.totals.total - report.totals.permanent;
        report
    }

    fn record(&mut self, employee: &Employee, policy: &RetirementPolicy) {
        self.totals.total += 1;
        if employee.is_active() {
            self.totals.active += 1;
        }
        if employee.employment_type.is_permanent() {
            self.totals.permanent += 1;
        }

        *self
            .department_counts
            .entry(employee.department_id.clone())
            .or_default() += 1;

        self.qualification_counts[classify_employee(employee).index()] += 1;

        let reading = calendar_age(employee, self.evaluation_date);
        if reading == AgeReading::Unknown {
            self.unknown_birth_dates += 1;
        }
        self.age_counts[AgeBand::for_reading(reading).index()] += 1;

        if let Some(age_months) = policy.approaching_age_months(employee, self.evaluation_date) {
            self.retirement_candidates.push(RetirementCandidate {
                employee_id: employee.id.clone(),
                full_name: employee.full_name.clone(),
                gender: employee.gender,
                age_months,
                retirement_age: policy.retirement_age(employee.gender),
                retirement_date: policy.retirement_date(employee),
            });
        }
    }

    pub fn qualification_count(&self, bucket: QualificationBucket) -> usize {
        self.qualification_counts[bucket.index()]
    }

    pub fn age_count(&self, band: AgeBand) -> usize {
        self.age_counts[band.index()]
    }

    pub fn summary(&self, departments: &[Department]) -> DashboardSummary {
        let department_entries = departments
            .iter()
            .filter_map(|department| {
                self.department_counts
                    .get(&department.id)
                    .filter(|count| **count > 0)
                    .map(|count| DepartmentHeadcountEntry {
                        department_id: department.id.clone(),
                        department_name: department.name.clone(),
                        count: *count,
                    })
            })
            .collect();

        let qualifications = QualificationBucket::ordered()
            .into_iter()
            .map(|bucket| QualificationEntry {
                bucket,
                label: bucket.label(),
                count: self.qualification_count(bucket),
            })
            .collect();

        let age_bands = AgeBand::ordered()
            .into_iter()
            .map(|band| AgeBandEntry {
                band,
                label: band.label(),
                count: self.age_count(band),
            })
            .collect();

        let retirement_candidates = self
            .retirement_candidates
            .iter()
            .map(RetirementCandidate::to_view)
            .collect();

        DashboardSummary {
            evaluation_date: self.evaluation_date,
            totals: self.totals,
            departments: department_entries,
            qualifications,
            age_bands,
            retirement_candidates,
            unknown_birth_dates: self.unknown_birth_dates,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RetirementCandidate {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub gender: Gender,
    /// Completed months, the measure the retirement window is defined on.
    pub age_months: u32,
    pub retirement_age: u32,
    pub retirement_date: Option<NaiveDate>,
}

impl RetirementCandidate {
    pub fn to_view(&self) -> RetirementCandidateView {
        RetirementCandidateView {
            employee_id: self.employee_id.clone(),
            full_name: self.full_name.clone(),
            gender: self.gender,
            gender_label: self.gender.label(),
            age_months: self.age_months,
            age_years: self.age_months / 12,
            retirement_age: self.retirement_age,
            retirement_date: self.retirement_date,
        }
    }
}
