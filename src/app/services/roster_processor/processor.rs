//! Roster processing pipeline
//!
//! Classifies every day record, analyses shift times and folds the result
//! into [`RosterStats`]. Runs once per document, single pass.

use tracing::{debug, info};

use crate::app::models::{ClassifiedDay, DayRecord, Roster};

use super::{
    classifier::classify_duty,
    stats::{ProcessingResult, RosterStats},
    time_analysis::{ShiftTiming, analyze_times},
};

/// Classify one day record
///
/// Time analysis only applies to working shifts; rest and empty days keep
/// a default timing even if the export shows times for them.
pub fn classify_day(record: DayRecord) -> ClassifiedDay {
    let category = classify_duty(record.duty.as_deref());
    let timing = if category.is_shift() {
        analyze_times(record.time_start.as_deref(), record.time_end.as_deref())
    } else {
        ShiftTiming::default()
    };

    ClassifiedDay {
        record,
        category,
        rolls_over: timing.rolls_over,
        is_overnight: timing.is_overnight,
        hours_worked: timing.hours_worked,
    }
}

/// Classify a sequence of day records and aggregate them
pub fn process_days(records: Vec<DayRecord>) -> ProcessingResult {
    info!("Processing {} day records", records.len());

    let days: Vec<ClassifiedDay> = records.into_iter().map(classify_day).collect();
    for day in days.iter().filter(|day| day.is_overnight) {
        debug!(
            "Overnight shift on {}: {} {}-{}",
            day.record.date_display(),
            day.record.duty_display(),
            day.record.time_start_display(),
            day.record.time_end_display()
        );
    }

    let stats = RosterStats::from_days(&days);
    let result = ProcessingResult::new(days, stats);
    info!("{}", result.summary());
    result
}

/// Process the days of an extracted roster
pub fn process_roster(roster: &Roster) -> ProcessingResult {
    process_days(roster.days.clone())
}
