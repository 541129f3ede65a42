// src/export/model.rs

use crate::models::AttendanceRecord;
use serde::Serialize;

/// Flat, string-typed view of a record for CSV / JSON / XLSX.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub date: String,
    pub time: String,
}

impl From<&AttendanceRecord> for RecordExport {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            subject: r.subject.clone(),
            date: r.date_str(),
            time: r.time_str(),
        }
    }
}

/// Export header, same order as the fields above.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["id", "name", "subject", "date", "time"]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.name.clone(),
        r.subject.clone(),
        r.date.clone(),
        r.time.clone(),
    ]
}
