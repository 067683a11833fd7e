use crate::infra::{load_roster, personnel_service};
use clap::Args;
use std::fmt::Write;
use std::path::PathBuf;
use ttyt_hrm::config::AppConfig;
use ttyt_hrm::error::AppError;
use ttyt_hrm::personnel::{
    Employee, EmployeeId, ReferenceCatalog, RosterEntryView, RosterQuery,
};

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Roster CSV export. Defaults to HRM_ROSTER_CSV, then the built-in sample.
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Case-insensitive substring of the full name.
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Department id, e.g. `noi`.
    #[arg(long)]
    pub(crate) department: Option<String>,
    /// Position id, e.g. `bs`.
    #[arg(long)]
    pub(crate) position: Option<String>,
    /// Print matching rows as JSON.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Employee id as stored in the roster.
    pub(crate) id: String,
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

pub(crate) fn run_list(args: ListArgs, config: &AppConfig) -> Result<(), AppError> {
    let ListArgs {
        roster,
        search,
        department,
        position,
        json,
    } = args;

    let (records, _) = load_roster(roster, config)?;
    let service = personnel_service(records, config);
    let query = RosterQuery {
        search,
        department_id: department,
        position_id: position,
    };
    let rows = service.search(&query)?;

    if json {
        let payload = serde_json::to_string_pretty(&rows).map_err(std::io::Error::from)?;
        println!("{payload}");
    } else {
        print!("{}", render_roster(&rows));
    }
    Ok(())
}

pub(crate) fn run_show(args: ShowArgs, config: &AppConfig) -> Result<(), AppError> {
    let (records, _) = load_roster(args.roster, config)?;
    let service = personnel_service(records, config);
    let employee = service.get(&EmployeeId(args.id))?;
    print!("{}", render_employee(&employee, service.catalog()));
    Ok(())
}

pub(crate) fn render_roster(rows: &[RosterEntryView]) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        let _ = writeln!(out, "No employees match the filter.");
        return out;
    }

    for row in rows {
        let birth_year = row
            .birth_year
            .map(|year| year.to_string())
            .unwrap_or_else(|| "?".to_string());
        let _ = writeln!(
            out,
            "{} | {} | {} | {} | {} / {} | {} | {}",
            row.employee_id,
            row.full_name,
            row.gender_label,
            birth_year,
            row.position_name,
            row.department_name,
            row.phone_number,
            row.status_label
        );
    }
    let _ = writeln!(out, "{} employee(s)", rows.len());
    out
}

pub(crate) fn render_employee(employee: &Employee, catalog: &ReferenceCatalog) -> String {
    let mut out = String::new();
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    let _ = writeln!(out, "{} ({})", employee.full_name, employee.id);
    let _ = writeln!(out, "Date of birth: {}", or_dash(&employee.date_of_birth));
    let _ = writeln!(out, "Gender: {}", employee.gender.label());
    let _ = writeln!(
        out,
        "Department: {}",
        catalog.department_name(&employee.department_id)
    );
    let _ = writeln!(out, "Position: {}", catalog.position_name(&employee.position_id));
    let _ = writeln!(out, "Phone: {}", or_dash(&employee.phone_number));
    let _ = writeln!(out, "Email: {}", optional(&employee.email));
    let _ = writeln!(out, "Employment type: {}", employee.employment_type.label());
    let _ = writeln!(out, "Status: {}", employee.status.label());
    let _ = writeln!(out, "Recruited: {}", or_dash(&employee.recruitment_date));
    let _ = writeln!(
        out,
        "ID card: {} (issued {})",
        or_dash(&employee.id_card_number),
        or_dash(&employee.id_card_issue_date)
    );
    let _ = writeln!(
        out,
        "Party member: {}",
        if employee.is_party_member { "yes" } else { "no" }
    );
    let _ = writeln!(
        out,
        "Highest specialization: {}",
        optional(&employee.highest_specialization)
    );
    let _ = writeln!(
        out,
        "Current specialization: {}",
        optional(&employee.current_specialization)
    );

    if !employee.work_history.is_empty() {
        let _ = writeln!(out, "Work history");
        for event in &employee.work_history {
            let _ = writeln!(out, "- {}: {}", event.date, event.event);
        }
    }
    out
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttyt_hrm::personnel::{RosterImporter, WorkHistoryEvent};

    fn catalog() -> ReferenceCatalog {
        ReferenceCatalog::standard()
    }

    #[test]
    fn roster_rows_resolve_reference_names() {
        let records = RosterImporter::sample().expect("sample imports");
        let rows: Vec<RosterEntryView> = RosterQuery::new("", Some("nhi"), None)
            .apply(&records)
            .into_iter()
            .map(|employee| RosterEntryView::new(employee, &catalog()))
            .collect();

        let text = render_roster(&rows);

        assert!(text.contains("EMP0004 | Phạm Thu Dung | Nữ | 1998 |"));
        assert!(text.contains("EMP0015 | Tạ Thị Uyên | Nữ | ? |"));
        assert!(text.ends_with("2 employee(s)\n"));
    }

    #[test]
    fn empty_result_has_a_message() {
        assert_eq!(render_roster(&[]), "No employees match the filter.\n");
    }

    #[test]
    fn employee_detail_marks_dangling_references_and_blanks() {
        let records = RosterImporter::sample().expect("sample imports");
        let mut pharmacist = records
            .into_iter()
            .find(|employee| employee.id.as_str() == "EMP0014")
            .expect("EMP0014 in sample");
        pharmacist.phone_number.clear();
        pharmacist.work_history.push(WorkHistoryEvent {
            date: "2000-10-01".to_string(),
            event: "Tuyển dụng".to_string(),
        });

        let text = render_employee(&pharmacist, &catalog());

        assert!(text.starts_with("Châu Văn Sơn (EMP0014)"));
        assert!(text.contains("Department: N/A"));
        assert!(text.contains("Phone: -"));
        assert!(text.contains("Email: -"));
        assert!(text.contains("- 2000-10-01: Tuyển dụng"));
    }
}
