use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use super::domain::{Employee, EmployeeId, EmployeeStatus, EmploymentType, Gender};
use super::reference::ReferenceCatalog;

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: unrecognised {column} value '{value}'")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("line {line}: record has no id")]
    MissingId { line: u64 },
    #[error("line {line}: duplicate id '{id}'")]
    DuplicateId { line: u64, id: String },
}

/// Demonstration roster shipped with the crate.
pub const SAMPLE_ROSTER_CSV: &str = include_str!("../../roster_sample.csv");

/// Loads a roster snapshot from a flat CSV export.
pub struct RosterImporter;

impl RosterImporter {
    pub fn sample() -> Result<Vec<Employee>, RosterImportError> {
        Self::from_reader(SAMPLE_ROSTER_CSV.as_bytes())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Employee>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Employee>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let catalog = ReferenceCatalog::standard();
        let mut seen: HashSet<String> = HashSet::new();
        let mut records = Vec::new();

        let headers = csv_reader.headers()?.clone();
        for result in csv_reader.records() {
            let record = result?;
            // Line the record starts on; quoted cells may span several.
            let line = record.position().map_or(0, |position| position.line());
            let row: RosterRow = record.deserialize(Some(&headers))?;
            let employee = row.into_employee(line, &catalog)?;

            if !seen.insert(employee.id.0.clone()) {
                return Err(RosterImportError::DuplicateId {
                    line,
                    id: employee.id.0,
                });
            }
            if employee.birth_date().is_none() {
                warn!(employee_id = %employee.id, line, "unreadable date of birth in roster");
            }
            records.push(employee);
        }

        debug!(records = records.len(), "roster imported");
        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(default)]
    id: String,
    full_name: String,
    #[serde(default)]
    date_of_birth: String,
    gender: String,
    #[serde(default)]
    department_id: String,
    #[serde(default)]
    position_id: String,
    #[serde(default)]
    phone_number: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    employment_type: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    recruitment_date: String,
    #[serde(default)]
    id_card_number: String,
    #[serde(default)]
    id_card_issue_date: String,
    #[serde(default)]
    is_party_member: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    highest_specialization: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    current_specialization: Option<String>,
}

impl RosterRow {
    fn into_employee(
        self,
        line: u64,
        catalog: &ReferenceCatalog,
    ) -> Result<Employee, RosterImportError> {
        if self.id.is_empty() {
            return Err(RosterImportError::MissingId { line });
        }

        let gender =
            parse_gender(&self.gender).ok_or_else(|| invalid(line, "gender", &self.gender))?;
        let employment_type = parse_employment_type(&self.employment_type)
            .ok_or_else(|| invalid(line, "employment_type", &self.employment_type))?;
        let status = if self.status.is_empty() {
            EmployeeStatus::default()
        } else {
            parse_status(&self.status).ok_or_else(|| invalid(line, "status", &self.status))?
        };
        let is_party_member = parse_flag(&self.is_party_member)
            .ok_or_else(|| invalid(line, "is_party_member", &self.is_party_member))?;

        let mut employee = Employee::blank(catalog);
        employee.id = EmployeeId(self.id);
        employee.full_name = self.full_name;
        employee.date_of_birth = self.date_of_birth;
        employee.gender = gender;
        employee.department_id = self.department_id;
        employee.position_id = self.position_id;
        employee.phone_number = self.phone_number;
        employee.email = self.email;
        employee.employment_type = employment_type;
        employee.status = status;
        employee.recruitment_date = self.recruitment_date;
        employee.id_card_number = self.id_card_number;
        employee.id_card_issue_date = self.id_card_issue_date;
        employee.is_party_member = is_party_member;
        employee.highest_specialization = self.highest_specialization;
        employee.current_specialization = self.current_specialization;
        Ok(employee)
    }
}

fn invalid(line: u64, column: &'static str, value: &str) -> RosterImportError {
    RosterImportError::InvalidValue {
        line,
        column,
        value: value.to_string(),
    }
}

fn parse_gender(value: &str) -> Option<Gender> {
    Gender::ordered()
        .into_iter()
        .find(|gender| gender.label() == value || gender.key().eq_ignore_ascii_case(value))
}

fn parse_employment_type(value: &str) -> Option<EmploymentType> {
    EmploymentType::ordered()
        .into_iter()
        .find(|kind| kind.label() == value || kind.key().eq_ignore_ascii_case(value))
}

fn parse_status(value: &str) -> Option<EmployeeStatus> {
    EmployeeStatus::ordered()
        .into_iter()
        .find(|status| status.label() == value || status.key().eq_ignore_ascii_case(value))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "" | "false" | "0" | "no" | "không" => Some(false),
        "true" | "1" | "x" | "yes" | "có" => Some(true),
        _ => None,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
