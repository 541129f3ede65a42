use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

pub const DATE_FMT: &str = "%Y-%m-%d";
pub const TIME_FMT: &str = "%H:%M:%S";

/// One attendance entry, i.e. one data row of the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub date: NaiveDate, // ⇔ Date column (TEXT "YYYY-MM-DD")
    pub time: NaiveTime, // ⇔ Time column (TEXT "HH:MM:SS")
}

impl AttendanceRecord {
    /// Build a record stamped with the date/time halves of `timestamp`.
    /// Sub-second precision is dropped, the sheet only keeps `HH:MM:SS`.
    pub fn stamped(id: i64, name: &str, subject: &str, timestamp: NaiveDateTime) -> Self {
        let time = timestamp.time();
        Self {
            id,
            name: name.to_string(),
            subject: subject.to_string(),
            date: timestamp.date(),
            time: time.with_nanosecond(0).unwrap_or(time),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format(DATE_FMT).to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format(TIME_FMT).to_string()
    }

    /// Fields in sheet column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.subject.clone(),
            self.date_str(),
            self.time_str(),
        ]
    }
}
