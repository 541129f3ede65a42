//! Operation journal (`<sheet>.log`): one CSV line per mutating command.

use crate::errors::{AppError, AppResult};
use crate::sheet::sidecar;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn journal_file(sheet: &Path) -> PathBuf {
    sidecar(sheet, "log")
}

/// Append a line to the journal of `sheet`.
pub fn ttlog(sheet: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let path = journal_file(sheet);
    let fresh = path.metadata().map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(fresh)
        .from_writer(file);

    wtr.serialize(JournalEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })
    .map_err(|e| AppError::storage(&path, e))?;

    wtr.flush()?;
    Ok(())
}

/// All journal lines, oldest first. A missing journal is empty.
pub fn load_journal(sheet: &Path) -> AppResult<Vec<JournalEntry>> {
    let path = journal_file(sheet);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::Reader::from_path(&path).map_err(|e| AppError::storage(&path, e))?;
    let mut out = Vec::new();
    for r in rdr.deserialize() {
        out.push(r.map_err(|e| AppError::storage(&path, e))?);
    }
    Ok(out)
}
