//! Day cell extraction
//!
//! Each `td.day` cell may hold a date, a duty number (or an allocation
//! name as fallback) and begin/end times. Absent or blank fields, and
//! fields holding the export's own `----` placeholder, become `None`.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::header::element_text;
use super::selectors::RosterSelectors;
use crate::app::models::DayRecord;
use crate::constants::EMPTY_SENTINEL;

/// Extract one record per day cell, in document order, duplicates included
pub fn extract_day_records(document: &Html, selectors: &RosterSelectors) -> Vec<DayRecord> {
    let records: Vec<DayRecord> = document
        .select(&selectors.day_cell)
        .map(|cell| extract_day_record(cell, selectors))
        .collect();

    debug!("Found {} day cells", records.len());
    records
}

/// Extract the fields of a single day cell
pub fn extract_day_record(cell: ElementRef<'_>, selectors: &RosterSelectors) -> DayRecord {
    DayRecord {
        date: field_text(cell, &selectors.date),
        duty: duty_text(cell, selectors),
        time_start: field_text(cell, &selectors.time_begin),
        time_end: field_text(cell, &selectors.time_end),
    }
}

/// Duty number wins when its element exists, even if blank; otherwise the
/// allocation name is used
fn duty_text(cell: ElementRef<'_>, selectors: &RosterSelectors) -> Option<String> {
    let element = cell
        .select(&selectors.duty_number)
        .next()
        .or_else(|| cell.select(&selectors.allocation_name).next())?;
    non_empty(element_text(element))
}

fn field_text(cell: ElementRef<'_>, selector: &Selector) -> Option<String> {
    cell.select(selector)
        .next()
        .map(element_text)
        .and_then(non_empty)
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() || text == EMPTY_SENTINEL {
        None
    } else {
        Some(text)
    }
}
