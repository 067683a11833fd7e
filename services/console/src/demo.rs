use crate::dashboard::render_dashboard;
use crate::infra::{personnel_service, RosterSource};
use crate::roster::render_roster;
use chrono::{Local, NaiveDate};
use clap::Args;
use ttyt_hrm::config::AppConfig;
use ttyt_hrm::error::AppError;
use ttyt_hrm::personnel::{
    Employee, EmployeeId, EmploymentType, Gender, RosterImporter, RosterQuery,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date for the dashboard (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

/// Scripted session over the sample roster: hire, edit, deactivate, report.
pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let service = personnel_service(RosterImporter::sample()?, config);

    println!("Personnel register demo (evaluated {today})");

    let mut draft = Employee::blank(service.catalog());
    draft.full_name = "Hoàng Thị Yến".to_string();
    draft.date_of_birth = "1996-04-02".to_string();
    draft.gender = Gender::Female;
    draft.department_id = "san".to_string();
    draft.position_id = "dd".to_string();
    draft.phone_number = "0912000099".to_string();
    draft.id_card_number = "001196000099".to_string();
    draft.id_card_issue_date = "2021-09-30".to_string();
    draft.recruitment_date = today.format("%Y-%m-%d").to_string();
    draft.highest_specialization = Some("CĐ Hộ sinh".to_string());

    let mut incomplete = draft.clone();
    incomplete.phone_number.clear();
    match service.create(incomplete) {
        Ok(record) => println!("- Unexpectedly stored incomplete record {}", record.id),
        Err(err) => println!("- Incomplete form rejected: {err}"),
    }

    let mut hired = service.create(draft)?;
    println!("- Hired {} as {}", hired.full_name, hired.id);

    hired.highest_specialization = Some("ĐH Hộ sinh".to_string());
    hired.employment_type = EmploymentType::PermanentCivilService;
    let hired = service.update(hired)?;
    println!(
        "- Updated {}: {} / {}",
        hired.id,
        hired.employment_type.label(),
        hired.highest_specialization.as_deref().unwrap_or("-")
    );

    let leaving = service.deactivate(&EmployeeId::from("EMP0010"))?;
    println!(
        "- Deactivated {} ({}), status {}",
        leaving.full_name,
        leaving.id,
        leaving.status.label()
    );

    println!("\nMaternity ward roster");
    let rows = service.search(&RosterQuery::new("", Some("san"), None))?;
    print!("{}", render_roster(&rows));

    println!();
    let summary = service.dashboard(today)?;
    print!("{}", render_dashboard(&summary, &RosterSource::Sample));
    Ok(())
}
