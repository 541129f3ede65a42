use crate::cli::commands::{journal, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = open_store(cfg);
        let record = store
            .get_attendance(*id)?
            .ok_or(AppError::NotFound(*id))?;

        let prompt = format!(
            "Delete record #{} ({} / {} on {})? This action is irreversible.",
            record.id,
            record.name,
            record.subject,
            record.date_str()
        );

        if !*yes && !confirm(&prompt).unwrap_or(false) {
            info("Operation cancelled.");
            return Ok(());
        }

        store.delete_attendance(*id)?;

        journal(
            &store,
            "del",
            &format!("#{}", id),
            &format!("{} / {}", record.name, record.subject),
        );
        success("Attendance deleted successfully!");
    }

    Ok(())
}
