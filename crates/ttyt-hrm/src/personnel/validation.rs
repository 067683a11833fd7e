use super::domain::Employee;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Presence check for the fields the entry form marks as required. Values are
/// not otherwise interpreted; dates in particular are stored as entered.
pub fn validate_required(employee: &Employee) -> Result<(), ValidationError> {
    let required: [(&'static str, &str); 8] = [
        ("full_name", employee.full_name.as_str()),
        ("date_of_birth", employee.date_of_birth.as_str()),
        ("phone_number", employee.phone_number.as_str()),
        ("id_card_number", employee.id_card_number.as_str()),
        ("id_card_issue_date", employee.id_card_issue_date.as_str()),
        ("department_id", employee.department_id.as_str()),
        ("position_id", employee.position_id.as_str()),
        ("recruitment_date", employee.recruitment_date.as_str()),
    ];

    let missing: Vec<&'static str> = required
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}
