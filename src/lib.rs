//! rAttendance library root.
//! Exposes the CLI parser, the attendance store, the high-level run()
//! function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Update { .. } => cli::commands::update::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom) = &cli.sheet {
        cfg.sheet = custom.clone();
    }
    if let Some(policy) = cli.id_policy {
        cfg.id_policy = policy;
    }

    logging::init(&cfg.log_level);

    // the sheet is created once at start-up for every command that reads or writes it
    if needs_sheet(&cli.command) {
        cli::commands::open_store(&cfg).initialize()?;
    }

    dispatch(&cli, &cfg)
}

fn needs_sheet(cmd: &Commands) -> bool {
    !matches!(
        cmd,
        Commands::Init | Commands::Config { .. } | Commands::Log { .. } | Commands::Backup { .. }
    )
}
