use crate::cli::commands::{journal, open_store};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped with `--test`)
///  - the attendance sheet, header row only, if it does not exist yet
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing rAttendance…");

    if !cli.test {
        let path = cfg.save()?;
        info(format!("Config file : {}", path.display()));
    }

    let store = open_store(cfg);
    let created = store.initialize()?;
    let sheet = store.path().display().to_string();
    info(format!("Id policy   : {}", store.id_policy().as_str()));

    if created {
        success(format!("Attendance sheet created at {}", sheet));
        journal(&store, "init", &sheet, "Attendance sheet created");
    } else {
        info(format!("Attendance sheet already present at {}", sheet));
    }

    success("rAttendance initialization completed!");
    Ok(())
}
