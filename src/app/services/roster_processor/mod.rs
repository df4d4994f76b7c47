//! Roster processing module
//!
//! Turns extracted day records into classified days and aggregate
//! statistics.
//!
//! # Architecture
//!
//! - [`classifier`] - duty code to rest day / shift / empty, plus destination
//! - [`time_analysis`] - roll-over marker, overnight cutoff and hours worked
//! - [`deduplication`] - first-occurrence-wins filtering by date
//! - [`stats`] - the statistics fold and processing result
//! - [`processor`] - pipeline tying the above together
//!
//! # Example Usage
//!
//! ```rust
//! use roster_report::app::models::DayRecord;
//! use roster_report::app::services::roster_processor::process_days;
//!
//! let records = vec![
//!     DayRecord::new(Some("01/01"), Some("BC101"), Some("08:00"), Some("16:00")),
//!     DayRecord::new(Some("02/01"), Some("D"), None, None),
//! ];
//! let result = process_days(records);
//! assert_eq!(result.stats.total_shifts, 1);
//! assert_eq!(result.stats.total_rest_days, 1);
//! ```

pub mod classifier;
pub mod deduplication;
pub mod processor;
pub mod stats;
pub mod time_analysis;

#[cfg(test)]
pub mod tests;

pub use classifier::{classify_duty, destination_for};
pub use deduplication::deduplicate_by_date;
pub use processor::{classify_day, process_days, process_roster};
pub use stats::{ProcessingResult, RosterStats};
pub use time_analysis::{ShiftTiming, analyze_times, hours_between, is_overnight};
