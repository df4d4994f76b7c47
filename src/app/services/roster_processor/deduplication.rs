//! Date-based deduplication of day records
//!
//! The export can repeat a day cell (for instance when a calendar week
//! straddles two rendered blocks). The first cell for a date wins.

use std::collections::HashSet;
use tracing::{debug, info};

use crate::app::models::DayRecord;

/// Keep the first record for each date, preserving document order
///
/// Records without a date share a single key, so only the first undated
/// record survives.
pub fn deduplicate_by_date(records: Vec<DayRecord>) -> Vec<DayRecord> {
    let mut seen: HashSet<Option<String>> = HashSet::new();
    let mut deduplicated = Vec::with_capacity(records.len());
    let mut duplicates_removed = 0;

    for record in records {
        if seen.insert(record.date.clone()) {
            deduplicated.push(record);
        } else {
            duplicates_removed += 1;
            debug!("Skipping duplicate day cell for date {}", record.date_display());
        }
    }

    if duplicates_removed > 0 {
        info!(
            "Deduplication complete: dropped {} duplicate day cells, {} days remaining",
            duplicates_removed,
            deduplicated.len()
        );
    }

    deduplicated
}
