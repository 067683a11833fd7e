use crate::dashboard::{run_dashboard, DashboardArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::roster::{run_list, run_show, ListArgs, ShowArgs};
use clap::{Parser, Subcommand};
use tracing::debug;
use ttyt_hrm::config::AppConfig;
use ttyt_hrm::error::AppError;
use ttyt_hrm::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "TTYT personnel register",
    about = "Staff dashboard and roster lookup for the district medical centre",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate the roster into the dashboard summary (default command)
    Dashboard(DashboardArgs),
    /// Browse employee records
    Employees {
        #[command(subcommand)]
        command: EmployeesCommand,
    },
    /// Walk through create, update and deactivate on the sample roster
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum EmployeesCommand {
    /// List employees matching a name search and department/position filters
    List(ListArgs),
    /// Show one employee record
    Show(ShowArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Dashboard(DashboardArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "configuration loaded");

    match command {
        Command::Dashboard(args) => run_dashboard(args, &config),
        Command::Employees {
            command: EmployeesCommand::List(args),
        } => run_list(args, &config),
        Command::Employees {
            command: EmployeesCommand::Show(args),
        } => run_show(args, &config),
        Command::Demo(args) => run_demo(args, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn dashboard_is_the_default_command() {
        let cli = Cli::try_parse_from(["ttyt-hrm"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn list_flags_parse() {
        let cli = Cli::try_parse_from([
            "ttyt-hrm",
            "employees",
            "list",
            "--search",
            "an",
            "--department",
            "noi",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Employees {
                command: EmployeesCommand::List(args),
            }) => {
                assert_eq!(args.search, "an");
                assert_eq!(args.department.as_deref(), Some("noi"));
                assert!(args.position.is_none());
                assert!(args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn malformed_today_is_rejected() {
        assert!(Cli::try_parse_from(["ttyt-hrm", "dashboard", "--today", "01/06/2024"]).is_err());
    }
}
