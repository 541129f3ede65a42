pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
pub mod update;

use crate::config::Config;
use crate::core::store::AttendanceStore;
use crate::sheet::journal;
use crate::ui::messages::warning;

/// Store bound to the configured sheet and id policy.
pub(crate) fn open_store(cfg: &Config) -> AttendanceStore {
    AttendanceStore::new(cfg.sheet_path(), cfg.id_policy)
}

/// Journal a completed operation; a failure here never fails the command.
pub(crate) fn journal(store: &AttendanceStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = journal::ttlog(store.path(), operation, target, message) {
        warning(format!("Failed to write operation journal: {}", e));
    }
}
