use crate::cli::commands::list::print_records;
use crate::cli::commands::{journal, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Update a record in place. The record is looked up first so a missing id
/// is reported instead of silently saving an unchanged sheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        id,
        name,
        subject,
        date: date_str,
        time: time_str,
    } = cmd
    {
        let store = open_store(cfg);
        let current = store
            .get_attendance(*id)?
            .ok_or(AppError::NotFound(*id))?;

        let new_name = name.as_deref().map(str::trim).unwrap_or(current.name.as_str());
        let new_subject = subject.as_deref().map(str::trim).unwrap_or(current.subject.as_str());
        let new_date = match date_str {
            Some(s) => date::parse_date(s)?,
            None => current.date,
        };
        let new_time = match time_str {
            Some(s) => date::parse_time(s)?,
            None => current.time,
        };

        store.update_attendance(*id, new_name, new_subject, new_date, new_time)?;

        journal(
            &store,
            "update",
            &format!("#{}", id),
            &format!("{} / {} {}", new_name, new_subject, new_date),
        );

        success("Attendance updated successfully!");
        if let Some(updated) = store.get_attendance(*id)? {
            print_records(std::slice::from_ref(&updated));
        }
    }

    Ok(())
}
