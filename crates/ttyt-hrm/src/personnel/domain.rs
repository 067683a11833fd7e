use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::reference::ReferenceCatalog;

/// Opaque identifier assigned when a record is first stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn ordered() -> [Self; 2] {
        [Self::Male, Self::Female]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Nam",
            Self::Female => "Nữ",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    PermanentCivilService,
    QuotaContract,
    SupportService,
    Piecework,
}

impl EmploymentType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::PermanentCivilService,
            Self::QuotaContract,
            Self::SupportService,
            Self::Piecework,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PermanentCivilService => "Biên chế sự nghiệp",
            Self::QuotaContract => "HĐ trong chỉ tiêu",
            Self::SupportService => "Hỗ trợ phục vụ",
            Self::Piecework => "Khoán",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::PermanentCivilService => "permanent_civil_service",
            Self::QuotaContract => "quota_contract",
            Self::SupportService => "support_service",
            Self::Piecework => "piecework",
        }
    }

    pub const fn is_permanent(self) -> bool {
        matches!(self, Self::PermanentCivilService)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Resigned,
    Transferred,
    Retired,
    ContractSuspended,
}

impl EmployeeStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Active,
            Self::Resigned,
            Self::Transferred,
            Self::Retired,
            Self::ContractSuspended,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Đang công tác",
            Self::Resigned => "Nghỉ việc",
            Self::Transferred => "Chuyển công tác",
            Self::Retired => "Nghỉ hưu",
            Self::ContractSuspended => "Tạm hoãn HĐ",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Resigned => "resigned",
            Self::Transferred => "transferred",
            Self::Retired => "retired",
            Self::ContractSuspended => "contract_suspended",
        }
    }

    /// Status written by a soft delete.
    pub const fn inactive() -> Self {
        Self::Resigned
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateManagementTraining {
    pub senior_specialist: bool,
    pub specialist: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoliticalTheoryTraining {
    pub advanced: bool,
    pub intermediate: bool,
    pub primary: bool,
}

/// Language levels are free text (B, B1, C...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForeignLanguageSkills {
    pub english: Option<String>,
    pub chinese: Option<String>,
    pub german: Option<String>,
    pub college_or_higher: bool,
    pub certificate: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InformaticsTraining {
    pub university_or_college: bool,
    pub certificate: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherCertificates {
    pub hospital_management: bool,
    pub nursing_management: bool,
    /// National defence course grade (DT3, DT4...).
    pub national_defense: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHistoryEvent {
    pub date: String,
    pub event: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionDocument {
    pub name: String,
    pub file_url: String,
}

/// A personnel record. Dates are kept as entered (`YYYY-MM-DD`) so that a
/// malformed value survives round trips and is resolved only when read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub full_name: String,
    pub date_of_birth: String,
    pub gender: Gender,
    pub department_id: String,
    pub position_id: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(default)]
    pub is_party_member: bool,

    pub id_card_number: String,
    pub id_card_issue_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_card_issue_place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hometown: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_address: Option<String>,

    pub employment_type: EmploymentType,
    pub recruitment_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_appointment_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification_by_rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_specialization: Option<String>,
    #[serde(default)]
    pub state_management: StateManagementTraining,
    #[serde(default)]
    pub political_theory: PoliticalTheoryTraining,
    #[serde(default)]
    pub foreign_language: ForeignLanguageSkills,
    #[serde(default)]
    pub informatics: InformaticsTraining,
    #[serde(default)]
    pub other_certificates: OtherCertificates,

    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub work_history: Vec<WorkHistoryEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decisions: Vec<DecisionDocument>,
}

impl Employee {
    /// Form defaults for a new record: first department and position of the
    /// catalog, quota contract, active.
    pub fn blank(catalog: &ReferenceCatalog) -> Self {
        Self {
            id: EmployeeId(String::new()),
            full_name: String::new(),
            date_of_birth: String::new(),
            gender: Gender::Male,
            department_id: catalog
                .departments()
                .first()
                .map(|department| department.id.clone())
                .unwrap_or_default(),
            position_id: catalog
                .positions()
                .first()
                .map(|position| position.id.clone())
                .unwrap_or_default(),
            phone_number: String::new(),
            email: None,
            ethnicity: None,
            religion: None,
            is_party_member: false,
            id_card_number: String::new(),
            id_card_issue_date: String::new(),
            id_card_issue_place: None,
            place_of_birth: None,
            hometown: None,
            permanent_address: None,
            current_address: None,
            employment_type: EmploymentType::QuotaContract,
            recruitment_date: String::new(),
            rank_code: None,
            rank_appointment_date: None,
            qualification_by_rank: None,
            current_specialization: None,
            highest_specialization: None,
            state_management: StateManagementTraining::default(),
            political_theory: PoliticalTheoryTraining::default(),
            foreign_language: ForeignLanguageSkills::default(),
            informatics: InformaticsTraining::default(),
            other_certificates: OtherCertificates::default(),
            status: EmployeeStatus::Active,
            work_history: Vec::new(),
            decisions: Vec::new(),
        }
    }

    /// Parsed date of birth, `None` when the stored text is empty or malformed.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date_of_birth)
    }

    pub fn birth_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.birth_date().map(|date| date.year())
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (its calendar date is used).
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_timestamp_dates() {
        let expected = NaiveDate::from_ymd_opt(1985, 3, 14).expect("valid date");
        assert_eq!(parse_calendar_date("1985-03-14"), Some(expected));
        assert_eq!(parse_calendar_date("  1985-03-14 "), Some(expected));
        assert_eq!(
            parse_calendar_date("1985-03-14T08:30:00+07:00"),
            Some(expected)
        );
    }

    #[test]
    fn rejects_empty_and_malformed_dates() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("   "), None);
        assert_eq!(parse_calendar_date("14/03/1985"), None);
        assert_eq!(parse_calendar_date("1985-02-30"), None);
    }

    #[test]
    fn blank_record_uses_catalog_defaults() {
        let catalog = ReferenceCatalog::standard();
        let blank = Employee::blank(&catalog);
        assert_eq!(blank.department_id, catalog.departments()[0].id);
        assert_eq!(blank.position_id, catalog.positions()[0].id);
        assert_eq!(blank.employment_type, EmploymentType::QuotaContract);
        assert_eq!(blank.status, EmployeeStatus::Active);
        assert!(blank.birth_date().is_none());
    }

    #[test]
    fn only_civil_service_counts_as_permanent() {
        let permanent: Vec<_> = EmploymentType::ordered()
            .into_iter()
            .filter(|kind| kind.is_permanent())
            .collect();
        assert_eq!(permanent, vec![EmploymentType::PermanentCivilService]);
    }
}
