use crate::cli::commands::list::print_records;
use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        match open_store(cfg).get_attendance(*id)? {
            Some(record) => print_records(std::slice::from_ref(&record)),
            None => warning(format!("Attendance record #{} not found", id)),
        }
    }

    Ok(())
}
