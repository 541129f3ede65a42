//! Persistent id counter kept next to the sheet (`<sheet>.seq`).

use crate::errors::{AppError, AppResult};
use crate::sheet::{sidecar, staging};
use std::fs;
use std::path::{Path, PathBuf};

pub fn sequence_file(sheet: &Path) -> PathBuf {
    sidecar(sheet, "seq")
}

/// Last id handed out, `0` when no counter has been written yet.
pub fn read_last(sheet: &Path) -> AppResult<i64> {
    let path = sequence_file(sheet);
    if !path.exists() {
        return Ok(0);
    }

    let raw = fs::read_to_string(&path).map_err(|e| AppError::storage(&path, e))?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::storage(&path, format!("corrupt id counter '{}'", raw.trim())))
}

pub fn write_last(sheet: &Path, id: i64) -> AppResult<()> {
    let path = sequence_file(sheet);
    let tmp = staging(&path);

    fs::write(&tmp, format!("{id}\n")).map_err(|e| AppError::storage(&path, e))?;
    fs::rename(&tmp, &path).map_err(|e| AppError::storage(&path, e))?;
    Ok(())
}
