//! Application constants for roster reporting
//!
//! Duty-code tables, sentinels, business cutoffs and output formats used
//! throughout the crate.

use crate::app::models::{Destination, RestDayType};

// =============================================================================
// Duty Codes
// =============================================================================

/// Duty codes that denote a rest day of some kind
pub const REST_DAY_CODES: &[&str] = &["D", "I", "DT", "LD", "V"];

/// Rest-day codes that are tallied individually in the report
pub const TALLIED_REST_DAYS: &[(&str, RestDayType)] = &[
    ("D", RestDayType::D),
    ("I", RestDayType::I),
    ("V", RestDayType::V),
];

/// Destination prefixes in match priority order
pub const DESTINATION_PREFIXES: &[(&str, Destination)] = &[
    ("BC", Destination::Barcelona),
    ("VL", Destination::Valencia),
    ("AG", Destination::Malaga),
    ("SV", Destination::Sevilla),
    ("AL", Destination::Alicante),
    ("MA", Destination::Madrid),
];

// =============================================================================
// Time Rules
// =============================================================================

/// Trailing marker on an end time meaning the shift ends the next day
pub const ROLLOVER_MARKER: char = '+';

/// A rolled-over shift only counts as overnight when it ends at or after this hour
pub const OVERNIGHT_CUTOFF_HOUR: u32 = 6;

/// Same-day shifts at or above this length are left out of the average
pub const SLEEPOVER_MIN_HOURS: f64 = 12.0;

/// Time-of-day format used in the roster export
pub const TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Output
// =============================================================================

/// Placeholder shown for any value absent from the document
pub const EMPTY_SENTINEL: &str = "----";

/// Date part of the output filename when no date is available
pub const UNKNOWN_DATE: &str = "unknown";

/// Format of the generation timestamp in the report footer
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y %H:%M:%S";

/// Document read when no input path is given
pub const DEFAULT_INPUT_FILE: &str = "untitled.html";

/// Width of the rule under the schedule table header
pub const TABLE_RULE_WIDTH: usize = 52;

// =============================================================================
// Document Selectors
// =============================================================================

pub mod selectors {
    pub const USER_NAME: &str = "span.user-name";
    pub const PERSONNEL_NUMBER: &str = "span.personnel-number";
    pub const DAY_CELL: &str = "td.day";
    pub const DATE: &str = "div.date";
    pub const DUTY_NUMBER: &str = "div.duty-nr";
    pub const ALLOCATION_NAME: &str = "div.allocation-name";
    pub const TIME_BEGIN: &str = "span.time.begin";
    pub const TIME_END: &str = "span.time.end";
}
