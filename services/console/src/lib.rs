mod cli;
mod dashboard;
mod demo;
mod infra;
mod roster;

use ttyt_hrm::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
