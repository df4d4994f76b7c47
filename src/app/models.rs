//! Core data structures for roster processing.
//!
//! Absent values are carried as `None` all the way through classification
//! and aggregation; the `----` placeholder only appears at render time.

use crate::constants::{DESTINATION_PREFIXES, EMPTY_SENTINEL};

/// Shift destinations encoded as a duty-code prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Destination {
    Barcelona,
    Valencia,
    Malaga,
    Sevilla,
    Alicante,
    Madrid,
}

impl Destination {
    pub const COUNT: usize = 6;

    /// All destinations in report order
    pub const ALL: [Destination; Self::COUNT] = [
        Destination::Barcelona,
        Destination::Valencia,
        Destination::Malaga,
        Destination::Sevilla,
        Destination::Alicante,
        Destination::Madrid,
    ];

    /// Two-letter prefix used in duty codes
    pub fn code(&self) -> &'static str {
        DESTINATION_PREFIXES
            .iter()
            .find(|(_, destination)| destination == self)
            .map(|(prefix, _)| *prefix)
            .unwrap_or("??")
    }

    /// Human-readable city name
    pub fn name(&self) -> &'static str {
        match self {
            Destination::Barcelona => "Barcelona",
            Destination::Valencia => "Valencia",
            Destination::Malaga => "Malaga",
            Destination::Sevilla => "Sevilla",
            Destination::Alicante => "Alicante",
            Destination::Madrid => "Madrid",
        }
    }

    /// Position in `ALL`, used to index per-destination counters
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Rest-day types that get their own counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestDayType {
    D,
    I,
    V,
}

impl RestDayType {
    pub const COUNT: usize = 3;

    pub const ALL: [RestDayType; Self::COUNT] = [RestDayType::D, RestDayType::I, RestDayType::V];

    pub fn code(&self) -> &'static str {
        match self {
            RestDayType::D => "D",
            RestDayType::I => "I",
            RestDayType::V => "V",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// What kind of day a duty code denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DutyCategory {
    /// Rest day; `tallied` is set only for the individually counted types
    Rest { tallied: Option<RestDayType> },
    /// Working shift, with the destination when the prefix is recognised
    Shift { destination: Option<Destination> },
    /// No duty recorded for the day
    Empty,
}

impl DutyCategory {
    pub fn is_shift(&self) -> bool {
        matches!(self, DutyCategory::Shift { .. })
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, DutyCategory::Rest { .. })
    }

    pub fn destination(&self) -> Option<Destination> {
        match self {
            DutyCategory::Shift { destination } => *destination,
            _ => None,
        }
    }
}

/// One calendar day as read from the roster document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayRecord {
    pub date: Option<String>,
    pub duty: Option<String>,
    pub time_start: Option<String>,
    /// May carry a trailing roll-over marker
    pub time_end: Option<String>,
}

impl DayRecord {
    pub fn new(
        date: Option<&str>,
        duty: Option<&str>,
        time_start: Option<&str>,
        time_end: Option<&str>,
    ) -> Self {
        Self {
            date: date.map(str::to_string),
            duty: duty.map(str::to_string),
            time_start: time_start.map(str::to_string),
            time_end: time_end.map(str::to_string),
        }
    }

    pub fn date_display(&self) -> &str {
        self.date.as_deref().unwrap_or(EMPTY_SENTINEL)
    }

    pub fn duty_display(&self) -> &str {
        self.duty.as_deref().unwrap_or(EMPTY_SENTINEL)
    }

    pub fn time_start_display(&self) -> &str {
        self.time_start.as_deref().unwrap_or(EMPTY_SENTINEL)
    }

    pub fn time_end_display(&self) -> &str {
        self.time_end.as_deref().unwrap_or(EMPTY_SENTINEL)
    }
}

/// A day record together with everything derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedDay {
    pub record: DayRecord,
    pub category: DutyCategory,
    /// End time carries the roll-over marker
    pub rolls_over: bool,
    pub is_overnight: bool,
    /// `None` when either time is unavailable
    pub hours_worked: Option<f64>,
}

impl ClassifiedDay {
    pub fn destination(&self) -> Option<Destination> {
        self.category.destination()
    }
}

/// Identity fields from the document header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeHeader {
    pub name: String,
    pub personnel_number: String,
}

/// Everything extracted from one roster document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub header: EmployeeHeader,
    /// Deduplicated by date, in document order
    pub days: Vec<DayRecord>,
}

impl Roster {
    /// Date of the first row, if there is a row and it has a date
    pub fn first_date(&self) -> Option<&str> {
        self.days.first().and_then(|day| day.date.as_deref())
    }

    /// Date of the last row, if there is a row and it has a date
    pub fn last_date(&self) -> Option<&str> {
        self.days.last().and_then(|day| day.date.as_deref())
    }
}
