use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use crate::ui::messages::info;
use crate::utils::period::{contains, parse_period};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        subject,
        name,
    } = cmd
    {
        let bounds = match period {
            Some(p) => parse_period(p)?,
            None => None,
        };

        let records: Vec<AttendanceRecord> = open_store(cfg)
            .list_attendance()?
            .into_iter()
            .filter(|r| contains(&bounds, r.date))
            .filter(|r| matches_text(subject, &r.subject))
            .filter(|r| matches_text(name, &r.name))
            .collect();

        if records.is_empty() {
            info("No attendance records found.");
            return Ok(());
        }

        println!("📋 Attendance records ({}):\n", records.len());
        print_records(&records);
    }

    Ok(())
}

/// Case-insensitive equality; no filter matches everything.
fn matches_text(filter: &Option<String>, value: &str) -> bool {
    filter
        .as_ref()
        .is_none_or(|f| f.trim().eq_ignore_ascii_case(value.trim()))
}

pub(crate) fn print_records(records: &[AttendanceRecord]) {
    let mut table = Table::new(["ID", "Name", "Subject", "Date", "Time"]);
    for r in records {
        table.add_row(r.to_row());
    }
    print!("{}", table.render());
}
