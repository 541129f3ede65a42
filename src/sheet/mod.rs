//! On-disk side of the attendance sheet: the record file codec, the id
//! sequence sidecar and the operation journal.

pub mod codec;
pub mod journal;
pub mod sequence;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;

/// `<sheet>.<ext>`, e.g. `attendance.csv.seq`.
pub fn sidecar(sheet: &Path, ext: &str) -> PathBuf {
    let mut s: OsString = sheet.as_os_str().to_owned();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

/// Per-process staging file used before renaming over `path`
/// (`<path>.<pid>.tmp`), so overlapping writers never share one temp file.
pub fn staging(path: &Path) -> PathBuf {
    sidecar(path, &format!("{}.tmp", process::id()))
}
