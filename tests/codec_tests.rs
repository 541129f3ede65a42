mod common;
use chrono::{NaiveDate, NaiveTime};
use common::setup_test_sheet;
use rattendance::models::AttendanceRecord;
use rattendance::sheet::codec::{self, FIRST_DATA_ROW};
use rattendance::sheet::{journal, staging};
use std::fs;
use std::path::Path;

fn record(id: i64, name: &str) -> AttendanceRecord {
    AttendanceRecord {
        id,
        name: name.to_string(),
        subject: "Math".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
    }
}

#[test]
fn test_initialize_writes_header_only() {
    let sheet = setup_test_sheet("codec_init");
    let path = Path::new(&sheet);

    assert!(codec::initialize(path).unwrap());
    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content.trim_end(), "ID,Name,Subject,Date,Time");
    assert!(codec::load_all(path).unwrap().is_empty());

    assert!(!codec::initialize(path).unwrap());
}

#[test]
fn test_append_and_row_positions() {
    let sheet = setup_test_sheet("codec_append");
    let path = Path::new(&sheet);
    codec::initialize(path).unwrap();

    codec::append_row(path, &record(1, "Alice")).unwrap();
    codec::append_row(path, &record(2, "Bob")).unwrap();

    let rows = codec::load_all(path).unwrap();
    let positions: Vec<usize> = rows.iter().map(|(p, _)| *p).collect();
    assert_eq!(positions, vec![FIRST_DATA_ROW, FIRST_DATA_ROW + 1]);
    assert_eq!(rows[1].1, record(2, "Bob"));

    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains("1,Alice,Math,2025-09-01,09:30:00"));
}

#[test]
fn test_save_rows_rewrites_data_keeping_header() {
    let sheet = setup_test_sheet("codec_save_rows");
    let path = Path::new(&sheet);
    codec::initialize(path).unwrap();
    codec::append_row(path, &record(1, "Alice")).unwrap();

    codec::save_rows(path, &[record(7, "Zed")]).unwrap();
    let rows = codec::load_all(path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].1.id, 7);

    codec::save_rows(path, &[]).unwrap();
    assert!(codec::load_all(path).unwrap().is_empty());
    assert!(fs::read_to_string(path).unwrap().starts_with("ID,Name,Subject,Date,Time"));
}

#[test]
fn test_missing_header_is_storage_unavailable() {
    let sheet = setup_test_sheet("codec_bad_header");
    fs::write(&sheet, "1,Alice,Math,2025-09-01,09:30:00\n").unwrap();

    let err = codec::load_all(Path::new(&sheet)).unwrap_err();
    assert!(err.is_storage());
}

#[test]
fn test_empty_file_is_storage_unavailable() {
    let sheet = setup_test_sheet("codec_empty_file");
    fs::write(&sheet, "").unwrap();

    assert!(codec::load_all(Path::new(&sheet)).unwrap_err().is_storage());
}

#[test]
fn test_corrupt_cells_are_storage_unavailable() {
    let sheet = setup_test_sheet("codec_corrupt_cells");
    fs::write(
        &sheet,
        "ID,Name,Subject,Date,Time\nabc,Alice,Math,2025-09-01,09:30:00\n",
    )
    .unwrap();
    assert!(codec::load_all(Path::new(&sheet)).unwrap_err().is_storage());

    fs::write(
        &sheet,
        "ID,Name,Subject,Date,Time\n1,Alice,Math,01/09/2025,09:30:00\n",
    )
    .unwrap();
    assert!(codec::load_all(Path::new(&sheet)).unwrap_err().is_storage());

    fs::write(&sheet, "ID,Name,Subject,Date,Time\n1,Alice,Math\n").unwrap();
    assert!(codec::load_all(Path::new(&sheet)).unwrap_err().is_storage());
}

#[test]
fn test_no_temp_file_left_after_save() {
    let sheet = setup_test_sheet("codec_tmp_cleanup");
    let path = Path::new(&sheet);
    codec::initialize(path).unwrap();
    codec::append_row(path, &record(1, "Alice")).unwrap();

    assert!(!staging(path).exists());
}

#[test]
fn test_save_ignores_foreign_temp_file() {
    let sheet = setup_test_sheet("codec_foreign_tmp");
    let path = Path::new(&sheet);
    codec::initialize(path).unwrap();

    // a temp file left by another writer must be neither reused nor renamed in
    let foreign = format!("{sheet}.tmp");
    fs::write(&foreign, "half written by someone else").unwrap();

    codec::append_row(path, &record(1, "Alice")).unwrap();

    assert_eq!(
        fs::read_to_string(&foreign).unwrap(),
        "half written by someone else"
    );
    let rows = codec::load_all(path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].1, record(1, "Alice"));
    assert!(staging(path).extension().is_some_and(|e| e == "tmp"));
    assert_ne!(staging(path), Path::new(&foreign));

    fs::remove_file(&foreign).ok();
}

#[test]
fn test_journal_appends_and_reads_back() {
    let sheet = setup_test_sheet("codec_journal");
    let path = Path::new(&sheet);

    assert!(journal::load_journal(path).unwrap().is_empty());

    journal::ttlog(path, "add", "#1", "Alice attended Math").unwrap();
    journal::ttlog(path, "del", "#1", "Alice / Math").unwrap();

    let entries = journal::load_journal(path).unwrap();
    let ops: Vec<&str> = entries.iter().map(|e| e.operation.as_str()).collect();
    assert_eq!(ops, vec!["add", "del"]);
    assert_eq!(entries[0].message, "Alice attended Math");
}
