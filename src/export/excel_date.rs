// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

pub(crate) const DATE_NUM_FORMAT: &str = "yyyy-mm-dd";
pub(crate) const TIME_NUM_FORMAT: &str = "hh:mm:ss";

/// Excel serial for a calendar date (days since 1899-12-30).
pub(crate) fn date_serial(d: NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}

/// Excel serial for a time of day (fraction of a day).
pub(crate) fn time_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}
