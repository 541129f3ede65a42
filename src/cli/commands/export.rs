use crate::cli::commands::{journal, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = open_store(cfg);
        let count = ExportLogic::export(&store, *format, file, range.as_deref(), *force)?;

        if count > 0 {
            journal(
                &store,
                "export",
                file,
                &format!("{} records exported as {}", count, format.as_str()),
            );
        }
    }

    Ok(())
}
