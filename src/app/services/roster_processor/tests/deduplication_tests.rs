//! Tests for date-based deduplication

use super::*;
use crate::app::services::roster_processor::deduplication::deduplicate_by_date;

#[test]
fn test_deduplicate_no_duplicates() {
    let records = create_sample_week();
    let result = deduplicate_by_date(records.clone());
    assert_eq!(result, records);
}

#[test]
fn test_deduplicate_first_occurrence_wins() {
    let records = vec![
        create_shift("01/01", "BC101", "08:00", "16:00"),
        create_shift("02/01", "VL202", "09:00", "17:00"),
        create_shift("01/01", "AG300", "10:00", "18:00"),
    ];

    let result = deduplicate_by_date(records);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].duty.as_deref(), Some("BC101"));
    assert_eq!(result[1].date.as_deref(), Some("02/01"));
}

#[test]
fn test_deduplicate_undated_cells_collapse() {
    let records = vec![
        DayRecord::new(None, None, None, None),
        create_day_without_times("01/01", "D"),
        DayRecord::new(None, Some("BC1"), None, None),
    ];

    let result = deduplicate_by_date(records);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].duty, None);
}

#[test]
fn test_deduplicate_empty_input() {
    assert!(deduplicate_by_date(Vec::new()).is_empty());
}
