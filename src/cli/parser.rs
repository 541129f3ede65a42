use crate::export::ExportFormat;
use crate::models::IdPolicy;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: record who attended which subject, stored in a CSV sheet",
    long_about = None
)]
pub struct Cli {
    /// Override attendance sheet path (useful for tests or a custom sheet)
    #[arg(global = true, long = "sheet")]
    pub sheet: Option<String>,

    /// Override the id assignment policy for new records
    #[arg(global = true, long = "id-policy", value_enum)]
    pub id_policy: Option<IdPolicy>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the attendance sheet and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the operation journal
    Log {
        #[arg(long = "print", help = "Print the operation journal")]
        print: bool,
    },

    /// Record attendance for a person, stamped with the current date and time
    Add {
        /// Attendee name
        name: String,

        /// Subject attended
        subject: String,
    },

    /// List attendance records
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end, all)"
        )]
        period: Option<String>,

        #[arg(long, help = "Show only records for this subject")]
        subject: Option<String>,

        #[arg(long, help = "Show only records for this name")]
        name: Option<String>,
    },

    /// Show a single attendance record
    Show {
        /// Record id
        id: i64,
    },

    /// Update an attendance record; omitted fields keep their current value
    Update {
        /// Record id
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long, help = "Date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Time (HH:MM:SS)")]
        time: Option<String>,
    },

    /// Delete an attendance record by id
    Del {
        /// Record id
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the attendance sheet
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export attendance records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
