//! Unified application error type.
//! All modules (sheet, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Record file
    // ---------------------------
    #[error("Attendance sheet unavailable ({path}): {reason}")]
    StorageUnavailable { path: String, reason: String },

    #[error("Attendance record #{0} not found")]
    NotFound(i64),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date format (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid time format (expected HH:MM:SS): {0}")]
    InvalidTime(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Wrap any failure touching the record file into `StorageUnavailable`.
    pub fn storage<E: std::fmt::Display>(path: &Path, err: E) -> Self {
        AppError::StorageUnavailable {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::StorageUnavailable { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
