//! Date/time parsing for values typed on the command line.

use crate::errors::{AppError, AppResult};
use crate::models::record::{DATE_FMT, TIME_FMT};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Local wall-clock time, used to stamp new records.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn parse_time(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FMT).map_err(|_| AppError::InvalidTime(s.to_string()))
}
