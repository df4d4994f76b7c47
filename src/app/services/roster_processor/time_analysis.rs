//! Shift time analysis
//!
//! Works on the raw `HH:MM` strings of the export. An end time may carry a
//! trailing roll-over marker meaning it falls on the next calendar day.
//!
//! Overnight rule: a shift is overnight only when the end time is marked AND
//! its hour is at least [`OVERNIGHT_CUTOFF_HOUR`]. A shift ending `05:30+` is
//! therefore not overnight, while `06:00+` is.

use chrono::{NaiveTime, Timelike};
use tracing::debug;

use crate::constants::{
    OVERNIGHT_CUTOFF_HOUR, ROLLOVER_MARKER, SLEEPOVER_MIN_HOURS, TIME_FORMAT,
};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Everything derived from a day's start and end times
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShiftTiming {
    pub rolls_over: bool,
    pub is_overnight: bool,
    pub hours_worked: Option<f64>,
}

/// Analyse a pair of optional times
pub fn analyze_times(time_start: Option<&str>, time_end: Option<&str>) -> ShiftTiming {
    let rolls_over = time_end.is_some_and(has_rollover_marker);
    let overnight = time_end.is_some_and(is_overnight);
    let hours_worked = match (time_start, time_end) {
        (Some(start), Some(end)) => hours_between(start, end),
        _ => None,
    };

    ShiftTiming {
        rolls_over,
        is_overnight: overnight,
        hours_worked,
    }
}

pub fn has_rollover_marker(time_end: &str) -> bool {
    time_end.trim_end().ends_with(ROLLOVER_MARKER)
}

pub fn strip_rollover_marker(time_end: &str) -> &str {
    time_end.trim().trim_end_matches(ROLLOVER_MARKER)
}

/// Parse the `HH:MM` part of a time of day, ignoring any roll-over marker
///
/// Trailing components such as seconds in `07:00:00` are ignored.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let cleaned = strip_rollover_marker(value);
    let hours_minutes = match cleaned.match_indices(':').nth(1) {
        Some((second_colon, _)) => &cleaned[..second_colon],
        None => cleaned,
    };
    match NaiveTime::parse_from_str(hours_minutes, TIME_FORMAT) {
        Ok(time) => Some(time),
        Err(e) => {
            debug!("Unparseable time '{}': {}", value, e);
            None
        }
    }
}

/// Marked end time whose hour is at or past the overnight cutoff
pub fn is_overnight(time_end: &str) -> bool {
    if !has_rollover_marker(time_end) {
        return false;
    }

    parse_time_of_day(time_end).is_some_and(|end| end.hour() >= OVERNIGHT_CUTOFF_HOUR)
}

/// Elapsed hours between start and end, rounded to two decimals
///
/// A marked end time is moved forward by 24 hours before subtracting.
/// Returns `None` when either time cannot be parsed.
pub fn hours_between(time_start: &str, time_end: &str) -> Option<f64> {
    let start = parse_time_of_day(time_start)?;
    let end = parse_time_of_day(time_end)?;

    let start_minutes = minutes_since_midnight(start);
    let mut end_minutes = minutes_since_midnight(end);
    if has_rollover_marker(time_end) {
        end_minutes += MINUTES_PER_DAY;
    }

    Some(round_hours((end_minutes - start_minutes) as f64 / 60.0))
}

/// Whether a shift belongs in the average that leaves out sleepovers
pub fn counts_toward_average(hours: f64, rolls_over: bool) -> bool {
    hours < SLEEPOVER_MIN_HOURS && !rolls_over
}

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
