use crate::cli::commands::list::print_records;
use crate::cli::commands::{journal, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Record attendance stamped with the local date and time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, subject } = cmd {
        let store = open_store(cfg);
        let record = store.record_attendance(name.trim(), subject.trim(), date::now())?;

        journal(
            &store,
            "add",
            &format!("#{}", record.id),
            &format!("{} attended {}", record.name, record.subject),
        );

        success("Attendance recorded successfully!");
        print_records(std::slice::from_ref(&record));
    }

    Ok(())
}
