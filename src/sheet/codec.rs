//! Record file codec.
//!
//! The sheet is a CSV file: one fixed header row followed by one row per
//! attendance record. Every operation reads or rewrites the whole file;
//! rewrites go through a per-process `<sheet>.<pid>.tmp` and a rename so a
//! failed save leaves the previous content in place.

use crate::errors::{AppError, AppResult};
use crate::models::AttendanceRecord;
use crate::models::record::{DATE_FMT, TIME_FMT};
use crate::sheet::staging;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Literal header row (row 1).
pub const HEADER: [&str; 5] = ["ID", "Name", "Subject", "Date", "Time"];

/// Physical row number of the first data row.
pub const FIRST_DATA_ROW: usize = 2;

#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Subject")]
    subject: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Time")]
    time: String,
}

impl SheetRow {
    fn into_record(self, path: &Path, row: usize) -> AppResult<AttendanceRecord> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FMT).map_err(|_| {
            AppError::storage(path, format!("row {row}: invalid date '{}'", self.date))
        })?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FMT).map_err(|_| {
            AppError::storage(path, format!("row {row}: invalid time '{}'", self.time))
        })?;

        Ok(AttendanceRecord {
            id: self.id,
            name: self.name,
            subject: self.subject,
            date,
            time,
        })
    }
}

/// Create the sheet with only the header row if nothing exists at `path`.
/// Returns `true` when the file was created by this call.
pub fn initialize(path: &Path) -> AppResult<bool> {
    if path.exists() {
        debug!(sheet = %path.display(), "sheet already present");
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AppError::storage(path, e))?;
    }

    write_sheet(path, &[])?;
    info!(sheet = %path.display(), "created new attendance sheet");
    Ok(true)
}

/// Every data row in file order, paired with its physical row number.
pub fn load_all(path: &Path) -> AppResult<Vec<(usize, AttendanceRecord)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| AppError::storage(path, e))?;

    let header = rdr.headers().map_err(|e| AppError::storage(path, e))?;
    if header.iter().ne(HEADER.iter().copied()) {
        return Err(AppError::storage(
            path,
            format!("missing or unexpected header row: {:?}", header),
        ));
    }

    let mut out = Vec::new();
    for (idx, result) in rdr.deserialize::<SheetRow>().enumerate() {
        let row = idx + FIRST_DATA_ROW;
        let raw = result.map_err(|e| AppError::storage(path, format!("row {row}: {e}")))?;
        out.push((row, raw.into_record(path, row)?));
    }

    debug!(sheet = %path.display(), rows = out.len(), "loaded sheet");
    Ok(out)
}

/// Append one row built from `record` and resave the sheet.
pub fn append_row(path: &Path, record: &AttendanceRecord) -> AppResult<()> {
    let mut rows: Vec<AttendanceRecord> = load_all(path)?.into_iter().map(|(_, r)| r).collect();
    rows.push(record.clone());
    write_sheet(path, &rows)
}

/// Replace every data row of the sheet with `rows`, header untouched.
pub fn save_rows(path: &Path, rows: &[AttendanceRecord]) -> AppResult<()> {
    write_sheet(path, rows)
}

fn write_sheet(path: &Path, rows: &[AttendanceRecord]) -> AppResult<()> {
    let tmp = staging(path);

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&tmp)
        .map_err(|e| AppError::storage(path, e))?;

    wtr.write_record(HEADER)
        .map_err(|e| AppError::storage(path, e))?;

    for r in rows {
        wtr.write_record(r.to_row())
            .map_err(|e| AppError::storage(path, e))?;
    }

    wtr.flush().map_err(|e| AppError::storage(path, e))?;
    drop(wtr);

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        AppError::storage(path, e)
    })?;

    Ok(())
}
