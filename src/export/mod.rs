//! Attendance export to csv / json / xlsx.

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::RecordExport;

use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Write `records` to `path` in this format and report where they went.
    pub(crate) fn write(&self, records: &[RecordExport], path: &Path) -> AppResult<()> {
        match self {
            ExportFormat::Csv => json_csv::export_csv(records, path)?,
            ExportFormat::Json => json_csv::export_json(records, path)?,
            ExportFormat::Xlsx => xlsx::export_xlsx(records, path)?,
        }
        success(format!(
            "{} export completed: {} records → {}",
            self.as_str().to_uppercase(),
            records.len(),
            path.display()
        ));
        Ok(())
    }
}
