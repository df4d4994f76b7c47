//! Tests for the roster processor module
//!
//! Unit tests for classification, time analysis, deduplication and the
//! statistics fold, with shared fixtures below.

pub mod classifier_tests;
pub mod deduplication_tests;

use crate::app::models::DayRecord;

/// Create a working day with both times
pub fn create_shift(date: &str, duty: &str, start: &str, end: &str) -> DayRecord {
    DayRecord::new(Some(date), Some(duty), Some(start), Some(end))
}

/// Create a day with a duty code and no times
pub fn create_day_without_times(date: &str, duty: &str) -> DayRecord {
    DayRecord::new(Some(date), Some(duty), None, None)
}

/// Create a day with nothing recorded but the date
pub fn create_empty_day(date: &str) -> DayRecord {
    DayRecord::new(Some(date), None, None, None)
}

/// The three-day roster used for end-to-end checks
pub fn create_sample_week() -> Vec<DayRecord> {
    vec![
        create_shift("01/01", "BC101", "08:00", "16:00"),
        create_day_without_times("02/01", "D"),
        create_shift("03/01", "VL202", "22:00", "07:00+"),
    ]
}

/// Assert two hour values agree to two decimals
pub fn assert_hours_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {:.2} hours, got {:.4}",
        expected,
        actual
    );
}
