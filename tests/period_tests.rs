use chrono::NaiveDate;
use rattendance::errors::AppError;
use rattendance::utils::period::{contains, parse_period};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_single_periods() {
    assert_eq!(parse_period("2025").unwrap(), Some((d(2025, 1, 1), d(2025, 12, 31))));
    assert_eq!(parse_period("2024-02").unwrap(), Some((d(2024, 2, 1), d(2024, 2, 29))));
    assert_eq!(parse_period("2025-12").unwrap(), Some((d(2025, 12, 1), d(2025, 12, 31))));
    assert_eq!(parse_period("2025-09-18").unwrap(), Some((d(2025, 9, 18), d(2025, 9, 18))));
}

#[test]
fn test_range_periods() {
    assert_eq!(
        parse_period("2024:2025").unwrap(),
        Some((d(2024, 1, 1), d(2025, 12, 31)))
    );
    assert_eq!(
        parse_period("2025-06:2025-08").unwrap(),
        Some((d(2025, 6, 1), d(2025, 8, 31)))
    );
}

#[test]
fn test_all_disables_filtering() {
    let bounds = parse_period("ALL").unwrap();
    assert!(bounds.is_none());
    assert!(contains(&bounds, d(1970, 1, 1)));
}

#[test]
fn test_invalid_periods() {
    for bad in ["25", "2025-13", "2025-09:2025", "2025-09-10:2025-09-01", "yesterday"] {
        assert!(
            matches!(parse_period(bad), Err(AppError::InvalidRange(_))),
            "{bad} should be rejected"
        );
    }
}
