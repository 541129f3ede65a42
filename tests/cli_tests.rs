use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_sheet_with_data, rat, setup_test_sheet};

#[test]
fn test_init_creates_header_only_sheet() {
    let sheet = setup_test_sheet("cli_init");

    rat()
        .args(["--sheet", &sheet, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Attendance sheet created"));

    let content = fs::read_to_string(&sheet).expect("read sheet");
    assert_eq!(content.trim_end(), "ID,Name,Subject,Date,Time");

    rat()
        .args(["--sheet", &sheet, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_add_and_list() {
    let sheet = setup_test_sheet("cli_add_list");
    init_sheet_with_data(&sheet);

    rat()
        .args(["--sheet", &sheet, "list"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Science"))
        .stdout(contains("Attendance records (2)"));
}

#[test]
fn test_list_filters_by_subject() {
    let sheet = setup_test_sheet("cli_list_subject");
    init_sheet_with_data(&sheet);

    rat()
        .args(["--sheet", &sheet, "list", "--subject", "math"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob").not());
}

#[test]
fn test_list_period_without_matches() {
    let sheet = setup_test_sheet("cli_list_period");
    init_sheet_with_data(&sheet);

    rat()
        .args(["--sheet", &sheet, "list", "--period", "1999"])
        .assert()
        .success()
        .stdout(contains("No attendance records found"));
}

#[test]
fn test_list_rejects_bad_period() {
    let sheet = setup_test_sheet("cli_list_bad_period");
    init_sheet_with_data(&sheet);

    rat()
        .args(["--sheet", &sheet, "list", "--period", "2025-09:2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_add_without_init_creates_sheet() {
    let sheet = setup_test_sheet("cli_add_autoinit");

    rat()
        .args(["--sheet", &sheet, "add", "Alice", "Math"])
        .assert()
        .success()
        .stdout(contains("Attendance recorded successfully"));

    let content = fs::read_to_string(&sheet).expect("read sheet");
    assert!(content.starts_with("ID,Name,Subject,Date,Time"));
    assert!(content.contains("1,Alice,Math,"));
}

#[test]
fn test_add_rejects_blank_name() {
    let sheet = setup_test_sheet("cli_add_blank");

    rat()
        .args(["--sheet", &sheet, "add", "  ", "Math"])
        .assert()
        .failure()
        .stderr(contains("name must not be empty"));
}

#[test]
fn test_show_missing_record_warns() {
    let sheet = setup_test_sheet("cli_show_missing");
    init_sheet_with_data(&sheet);

    rat()
        .args(["--sheet", &sheet, "show", "2"])
        .assert()
        .success()
        .stdout(contains("Bob"));

    rat()
        .args(["--sheet", &sheet, "show", "99"])
        .assert()
        .success()
        .stdout(contains("not found"));
}

#[test]
fn test_update_keeps_omitted_fields() {
    let sheet = setup_test_sheet("cli_update");
    init_sheet_with_data(&sheet);

    rat()
        .args([
            "--sheet",
            &sheet,
            "update",
            "1",
            "--subject",
            "Physics",
            "--date",
            "2025-09-10",
            "--time",
            "08:00:00",
        ])
        .assert()
        .success()
        .stdout(contains("Attendance updated successfully"));

    let content = fs::read_to_string(&sheet).expect("read sheet");
    assert!(content.contains("1,Alice,Physics,2025-09-10,08:00:00"));
}

#[test]
fn test_update_missing_record_fails() {
    let sheet = setup_test_sheet("cli_update_missing");
    init_sheet_with_data(&sheet);

    rat()
        .args(["--sheet", &sheet, "update", "99", "--name", "Zed"])
        .assert()
        .failure()
        .stderr(contains("Attendance record #99 not found"));
}

#[test]
fn test_update_rejects_bad_time() {
    let sheet = setup_test_sheet("cli_update_bad_time");
    init_sheet_with_data(&sheet);

    rat()
        .args(["--sheet", &sheet, "update", "1", "--time", "8am"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_del_then_add_collides_with_row_count_ids() {
    let sheet = setup_test_sheet("cli_del_collision");
    init_sheet_with_data(&sheet);

    rat()
        .args(["--sheet", &sheet, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Attendance deleted successfully"));

    rat()
        .args(["--sheet", &sheet, "add", "Carol", "Art"])
        .assert()
        .success();

    let content = fs::read_to_string(&sheet).expect("read sheet");
    assert!(!content.contains("Alice"));
    assert!(content.contains("2,Bob,Science,"));
    assert!(content.contains("2,Carol,Art,"));
}

#[test]
fn test_del_with_sequence_policy_does_not_reuse_ids() {
    let sheet = setup_test_sheet("cli_del_sequence");

    for (name, subject) in [("Alice", "Math"), ("Bob", "Science")] {
        rat()
            .args(["--sheet", &sheet, "--id-policy", "sequence", "add", name, subject])
            .assert()
            .success();
    }

    rat()
        .args(["--sheet", &sheet, "--id-policy", "sequence", "del", "1", "--yes"])
        .assert()
        .success();

    rat()
        .args(["--sheet", &sheet, "--id-policy", "sequence", "add", "Carol", "Art"])
        .assert()
        .success();

    let content = fs::read_to_string(&sheet).expect("read sheet");
    assert!(content.contains("3,Carol,Art,"));
}

#[test]
fn test_del_cancelled_keeps_record() {
    let sheet = setup_test_sheet("cli_del_cancel");
    init_sheet_with_data(&sheet);

    rat()
        .args(["--sheet", &sheet, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    let content = fs::read_to_string(&sheet).expect("read sheet");
    assert!(content.contains("Alice"));
}

#[test]
fn test_corrupt_sheet_reports_storage_error() {
    let sheet = setup_test_sheet("cli_corrupt");
    fs::write(&sheet, "not,a,sheet\n").expect("write corrupt sheet");

    rat()
        .args(["--sheet", &sheet, "list"])
        .assert()
        .failure()
        .stderr(contains("Attendance sheet unavailable"));
}

#[test]
fn test_log_print_shows_operations() {
    let sheet = setup_test_sheet("cli_log");
    init_sheet_with_data(&sheet);

    rat()
        .args(["--sheet", &sheet, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Operation journal"))
        .stdout(contains("Alice attended Math"))
        .stdout(contains("Attendance sheet created"));
}
