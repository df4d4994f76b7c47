//! Roster statistics and the processing result
//!
//! `RosterStats` is built in a single forward fold over classified days.
//! Percentage and average accessors guard their denominators.

use crate::app::models::{ClassifiedDay, Destination, DutyCategory, RestDayType};

use super::time_analysis::counts_toward_average;

/// Aggregate counters for one employee's roster
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterStats {
    pub total_days: usize,
    pub total_shifts: usize,
    pub shifts_by_destination: [usize; Destination::COUNT],
    pub total_rest_days: usize,
    pub rest_days_by_type: [usize; RestDayType::COUNT],
    pub total_overnight_shifts: usize,
    pub overnight_by_destination: [usize; Destination::COUNT],
    /// Sum of shift hours where both times were available
    pub total_hours: f64,
    pub non_overnight_hours: f64,
    pub non_overnight_shifts: usize,
}

impl RosterStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a sequence of classified days into statistics
    pub fn from_days<'a>(days: impl IntoIterator<Item = &'a ClassifiedDay>) -> Self {
        days.into_iter().fold(Self::new(), |mut stats, day| {
            stats.record(day);
            stats
        })
    }

    /// Account for one classified day
    pub fn record(&mut self, day: &ClassifiedDay) {
        self.total_days += 1;

        match day.category {
            DutyCategory::Empty => {}
            DutyCategory::Rest { tallied } => {
                self.total_rest_days += 1;
                if let Some(rest_type) = tallied {
                    self.rest_days_by_type[rest_type.index()] += 1;
                }
            }
            DutyCategory::Shift { destination } => {
                self.total_shifts += 1;
                if let Some(destination) = destination {
                    self.shifts_by_destination[destination.index()] += 1;
                }

                if day.is_overnight {
                    self.total_overnight_shifts += 1;
                    if let Some(destination) = destination {
                        self.overnight_by_destination[destination.index()] += 1;
                    }
                }

                if let Some(hours) = day.hours_worked {
                    self.total_hours += hours;
                    if counts_toward_average(hours, day.rolls_over) {
                        self.non_overnight_hours += hours;
                        self.non_overnight_shifts += 1;
                    }
                }
            }
        }
    }

    pub fn shifts_for(&self, destination: Destination) -> usize {
        self.shifts_by_destination[destination.index()]
    }

    pub fn overnight_for(&self, destination: Destination) -> usize {
        self.overnight_by_destination[destination.index()]
    }

    pub fn rest_days_for(&self, rest_type: RestDayType) -> usize {
        self.rest_days_by_type[rest_type.index()]
    }

    /// Share of all shifts that went to `destination`
    pub fn destination_percentage(&self, destination: Destination) -> f64 {
        percentage(self.shifts_for(destination), self.total_shifts)
    }

    /// Share of all shifts that were overnight
    pub fn overnight_percentage(&self) -> f64 {
        percentage(self.total_overnight_shifts, self.total_shifts)
    }

    /// Share of overnight shifts that went to `destination`
    pub fn overnight_destination_percentage(&self, destination: Destination) -> f64 {
        percentage(self.overnight_for(destination), self.total_overnight_shifts)
    }

    /// Average hours per shift leaving out sleepovers, `None` when no shift qualifies
    pub fn average_non_overnight_hours(&self) -> Option<f64> {
        if self.non_overnight_shifts == 0 {
            None
        } else {
            Some(self.non_overnight_hours / self.non_overnight_shifts as f64)
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Roster Summary: {} days | {} shifts ({} overnight) | {} rest days | {:.2} hours",
            self.total_days,
            self.total_shifts,
            self.total_overnight_shifts,
            self.total_rest_days,
            self.total_hours
        )
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    }
}

/// Classified days together with their statistics
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub days: Vec<ClassifiedDay>,
    pub stats: RosterStats,
}

impl ProcessingResult {
    pub fn new(days: Vec<ClassifiedDay>, stats: RosterStats) -> Self {
        Self { days, stats }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
