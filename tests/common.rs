#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rattendance::core::AttendanceStore;
use rattendance::models::IdPolicy;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test sheet path inside the system temp dir and remove any
/// leftovers (sheet, id counter, journal) from a previous run
pub fn setup_test_sheet(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.csv", name));
    let sheet = path.to_string_lossy().to_string();
    for ext in ["", ".seq", ".log", ".tmp"] {
        fs::remove_file(format!("{sheet}{ext}")).ok();
    }
    sheet
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, initialized store on a clean sheet
pub fn fresh_store(name: &str, policy: IdPolicy) -> AttendanceStore {
    let store = AttendanceStore::new(setup_test_sheet(name), policy);
    store.initialize().expect("initialize sheet");
    store
}

pub fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S")
        .expect("valid timestamp")
}

pub fn day(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date")
}

/// Initialize a sheet via CLI and add a small dataset useful for many tests
pub fn init_sheet_with_data(sheet: &str) {
    rat()
        .args(["--sheet", sheet, "--test", "init"])
        .assert()
        .success();

    for (name, subject) in [("Alice", "Math"), ("Bob", "Science")] {
        rat()
            .args(["--sheet", sheet, "add", name, subject])
            .assert()
            .success();
    }
}
