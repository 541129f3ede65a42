// src/export/logic.rs

use crate::core::store::AttendanceStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, require_absolute};
use crate::export::model::RecordExport;
use crate::ui::messages::warning;
use crate::utils::period::{contains, parse_period};
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the attendance records.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or a period expression (`YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD` or a `start:end` pair of the same shape)
    ///
    /// Returns the number of exported records.
    pub fn export(
        store: &AttendanceStore,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        require_absolute(path)?;

        let bounds = match range {
            Some(r) => parse_period(r)?,
            None => None,
        };

        let records: Vec<RecordExport> = store
            .list_attendance()?
            .iter()
            .filter(|r| contains(&bounds, r.date))
            .map(RecordExport::from)
            .collect();

        if records.is_empty() {
            warning("No attendance records found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        format.write(&records, path)?;

        Ok(records.len())
    }
}
