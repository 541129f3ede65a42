//! Attendance store: CRUD and id assignment over the sheet codec.
//!
//! The sheet is the single source of truth. Nothing is cached between
//! calls: each operation loads the file, works on an in-memory copy and, for
//! mutations, writes the whole sheet back. There is no locking, so callers
//! that need concurrent correctness must serialize access themselves.

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, IdPolicy};
use crate::sheet::{codec, sequence};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub struct AttendanceStore {
    path: PathBuf,
    id_policy: IdPolicy,
}

impl AttendanceStore {
    pub fn new(path: impl Into<PathBuf>, id_policy: IdPolicy) -> Self {
        Self {
            path: path.into(),
            id_policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    /// Create the header-only sheet if it does not exist yet.
    pub fn initialize(&self) -> AppResult<bool> {
        codec::initialize(&self.path).inspect_err(|e| error!("Error initializing sheet: {e}"))
    }

    /// Append a new record stamped with `timestamp` and return it.
    pub fn record_attendance(
        &self,
        name: &str,
        subject: &str,
        timestamp: NaiveDateTime,
    ) -> AppResult<AttendanceRecord> {
        require_text("name", name)?;
        require_text("subject", subject)?;

        info!("Attempting to record attendance for {name} in {subject}");

        let result = self.append_stamped(name, subject, timestamp);

        match &result {
            Ok(r) => info!(id = r.id, "Attendance recorded successfully for {name}"),
            Err(e) => error!("Error recording attendance: {e}"),
        }
        result
    }

    /// Every record in file order, oldest first.
    pub fn list_attendance(&self) -> AppResult<Vec<AttendanceRecord>> {
        info!("Fetching attendance data");

        let records: Vec<AttendanceRecord> = codec::load_all(&self.path)
            .inspect_err(|e| error!("Error displaying attendance: {e}"))?
            .into_iter()
            .map(|(_, r)| r)
            .collect();

        info!("Fetched {} attendance records", records.len());
        Ok(records)
    }

    /// First record whose id is `id`. Later rows sharing the id are not reachable.
    pub fn get_attendance(&self, id: i64) -> AppResult<Option<AttendanceRecord>> {
        let found = codec::load_all(&self.path)?
            .into_iter()
            .map(|(_, r)| r)
            .find(|r| r.id == id);

        if found.is_none() {
            warn!(id, "Attendance record not found");
        }
        Ok(found)
    }

    /// Overwrite name/subject/date/time of the first record with `id`; the id
    /// itself is kept. The sheet is saved even when nothing matched.
    /// Returns whether a row was changed.
    pub fn update_attendance(
        &self,
        id: i64,
        name: &str,
        subject: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<bool> {
        require_text("name", name)?;
        require_text("subject", subject)?;

        let mut rows: Vec<AttendanceRecord> = codec::load_all(&self.path)?
            .into_iter()
            .map(|(_, r)| r)
            .collect();

        let matched = match rows.iter_mut().find(|r| r.id == id) {
            Some(r) => {
                r.name = name.to_string();
                r.subject = subject.to_string();
                r.date = date;
                r.time = time;
                true
            }
            None => {
                warn!(id, "update target not found, sheet left unchanged");
                false
            }
        };

        codec::save_rows(&self.path, &rows)
            .inspect_err(|e| error!("Error updating attendance: {e}"))?;

        if matched {
            info!(id, "Attendance updated");
        }
        Ok(matched)
    }

    /// Remove the first row with `id`. Other rows keep their ids.
    /// Returns whether a row was removed.
    pub fn delete_attendance(&self, id: i64) -> AppResult<bool> {
        let mut rows: Vec<AttendanceRecord> = codec::load_all(&self.path)?
            .into_iter()
            .map(|(_, r)| r)
            .collect();

        let removed = match rows.iter().position(|r| r.id == id) {
            Some(idx) => {
                rows.remove(idx);
                true
            }
            None => {
                warn!(id, "delete target not found, sheet left unchanged");
                false
            }
        };

        codec::save_rows(&self.path, &rows)
            .inspect_err(|e| error!("Error deleting attendance: {e}"))?;

        if removed {
            info!(id, "Attendance deleted");
        }
        Ok(removed)
    }

    fn append_stamped(
        &self,
        name: &str,
        subject: &str,
        timestamp: NaiveDateTime,
    ) -> AppResult<AttendanceRecord> {
        let rows = codec::load_all(&self.path)?;
        let id = self.next_id(&rows)?;

        // counter before row: an error here leaves no row on disk
        if self.id_policy == IdPolicy::Sequence {
            sequence::write_last(&self.path, id)?;
        }

        let record = AttendanceRecord::stamped(id, name, subject, timestamp);
        codec::append_row(&self.path, &record)?;
        Ok(record)
    }

    fn next_id(&self, rows: &[(usize, AttendanceRecord)]) -> AppResult<i64> {
        match self.id_policy {
            // header row counts: first record on an empty sheet gets 1
            IdPolicy::RowCount => Ok(rows.len() as i64 + 1),
            IdPolicy::Sequence => {
                let last = sequence::read_last(&self.path)?;
                let max_existing = rows.iter().map(|(_, r)| r.id).max().unwrap_or(0);
                Ok(last.max(max_existing) + 1)
            }
        }
    }
}

fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}
