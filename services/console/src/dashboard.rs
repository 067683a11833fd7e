use crate::infra::{load_roster, personnel_service, RosterSource};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::fmt::Write;
use std::path::PathBuf;
use ttyt_hrm::config::AppConfig;
use ttyt_hrm::error::AppError;
use ttyt_hrm::personnel::report::views::DashboardSummary;

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Roster CSV export. Defaults to HRM_ROSTER_CSV, then the built-in sample.
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the summary as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_dashboard(args: DashboardArgs, config: &AppConfig) -> Result<(), AppError> {
    let DashboardArgs {
        roster,
        today,
        json,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let (records, source) = load_roster(roster, config)?;
    let service = personnel_service(records, config);
    let summary = service.dashboard(today)?;

    if json {
        let payload = serde_json::to_string_pretty(&summary).map_err(std::io::Error::from)?;
        println!("{payload}");
    } else {
        print!("{}", render_dashboard(&summary, &source));
    }
    Ok(())
}

pub(crate) fn render_dashboard(summary: &DashboardSummary, source: &RosterSource) -> String {
    let mut out = String::new();
    let totals = &summary.totals;

    let _ = writeln!(out, "Personnel dashboard ({})", summary.evaluation_date);
    let _ = writeln!(out, "Data source: {}", source.describe());
    let _ = writeln!(
        out,
        "Headcount: {} total | {} active | {} permanent | {} non-permanent",
        totals.total, totals.active, totals.permanent, totals.non_permanent
    );

    if summary.departments.is_empty() {
        let _ = writeln!(out, "\nStaff by department: none");
    } else {
        let _ = writeln!(out, "\nStaff by department");
        for entry in &summary.departments {
            let _ = writeln!(out, "- {}: {}", entry.department_name, entry.count);
        }
    }

    let _ = writeln!(out, "\nQualification levels");
    for entry in &summary.qualifications {
        let _ = writeln!(out, "- {}: {}", entry.label, entry.count);
    }

    let _ = writeln!(out, "\nAge structure");
    for entry in &summary.age_bands {
        let _ = writeln!(out, "- {}: {}", entry.label, entry.count);
    }
    if summary.unknown_birth_dates > 0 {
        let _ = writeln!(
            out,
            "  ({} record(s) without a readable date of birth counted in '> 60')",
            summary.unknown_birth_dates
        );
    }

    if summary.retirement_candidates.is_empty() {
        let _ = writeln!(out, "\nUpcoming retirements: none");
    } else {
        let _ = writeln!(out, "\nUpcoming retirements");
        for candidate in &summary.retirement_candidates {
            let due = candidate
                .retirement_date
                .map(|date| format!(", due {date}"))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "- {} ({}) | {} | age {}y {}m of {}{}",
                candidate.full_name,
                candidate.employee_id,
                candidate.gender_label,
                candidate.age_years,
                candidate.age_months % 12,
                candidate.retirement_age,
                due
            );
        }
    }

    out
}
