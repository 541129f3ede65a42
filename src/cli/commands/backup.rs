use crate::cli::commands::{journal, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let store = open_store(cfg);
        if let Some(written) = BackupLogic::backup(store.path(), file, *compress)? {
            let message = if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            };
            journal(&store, "backup", &written.to_string_lossy(), message);
        }
    }

    Ok(())
}
