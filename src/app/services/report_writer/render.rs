//! Text rendering of the roster report
//!
//! Both surfaces share the statistics block and the schedule table. The
//! file report adds the employee header and a generation timestamp.

use chrono::NaiveDateTime;

use crate::app::models::{ClassifiedDay, Destination, RestDayType, Roster};
use crate::app::services::roster_processor::RosterStats;
use crate::constants::{EMPTY_SENTINEL, TABLE_RULE_WIDTH, TIMESTAMP_FORMAT, UNKNOWN_DATE};

/// Full report written to the output file
pub fn render_file_report(
    roster: &Roster,
    days: &[ClassifiedDay],
    stats: &RosterStats,
    generated_at: NaiveDateTime,
) -> String {
    let mut lines = vec![
        format!("Employee: {}", roster.header.name),
        format!("Personnel Number: {}", roster.header.personnel_number),
        format!(
            "Parsing dates from {} to {}",
            roster.first_date().unwrap_or(UNKNOWN_DATE),
            roster.last_date().unwrap_or(UNKNOWN_DATE)
        ),
        String::new(),
    ];
    lines.extend(statistics_lines(stats));
    lines.push(String::new());
    lines.push("Schedule:".to_string());
    lines.extend(schedule_lines(days));
    lines.push(String::new());
    lines.push(format!(
        "This report has been generated at: {}",
        generated_at.format(TIMESTAMP_FORMAT)
    ));

    join_lines(lines)
}

/// Report printed to standard output: no header, no timestamp
pub fn render_console_report(days: &[ClassifiedDay], stats: &RosterStats) -> String {
    let mut lines = statistics_lines(stats);
    lines.push(String::new());
    lines.push("Employee Schedule:".to_string());
    lines.extend(schedule_lines(days));

    join_lines(lines)
}

/// Counts, percentages and hour figures
pub fn statistics_lines(stats: &RosterStats) -> Vec<String> {
    let mut lines = vec![
        "Statistics:".to_string(),
        format!("Total Days Parsed: {}", stats.total_days),
        format!("Total Shifts: {}", stats.total_shifts),
    ];

    for destination in Destination::ALL {
        lines.push(format!(
            "  {} ({}): {} ({:.2}%)",
            destination.code(),
            destination.name(),
            stats.shifts_for(destination),
            stats.destination_percentage(destination)
        ));
    }

    lines.push(format!(
        "Total Overnight Shifts: {} ({:.2}%)",
        stats.total_overnight_shifts,
        stats.overnight_percentage()
    ));

    lines.push(String::new());
    lines.push("Overnight Shifts by Destination:".to_string());
    for destination in Destination::ALL {
        let count = stats.overnight_for(destination);
        if count > 0 {
            lines.push(format!(
                "  {} ({}): {} ({:.2}%)",
                destination.code(),
                destination.name(),
                count,
                stats.overnight_destination_percentage(destination)
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("Total Rest Days: {}", stats.total_rest_days));
    for rest_type in RestDayType::ALL {
        lines.push(format!(
            "  {}: {}",
            rest_type.code(),
            stats.rest_days_for(rest_type)
        ));
    }

    lines.push(String::new());
    lines.push(format!("Total Hours Worked: {:.2}", stats.total_hours));
    let average = match stats.average_non_overnight_hours() {
        Some(hours) => format!("{:.2}", hours),
        None => "N/A".to_string(),
    };
    lines.push(format!(
        "Average Hours per Shift (excluding sleepovers): {}",
        average
    ));

    lines
}

/// Fixed-width schedule table with a header row and rule
pub fn schedule_lines(days: &[ClassifiedDay]) -> Vec<String> {
    let mut lines = vec![
        table_row("Date", "Duty", "Start Time", "End Time", "Hours"),
        "-".repeat(TABLE_RULE_WIDTH),
    ];

    for day in days {
        let hours = day
            .hours_worked
            .map(|h| format!("{:.2}", h))
            .unwrap_or_else(|| EMPTY_SENTINEL.to_string());
        lines.push(table_row(
            day.record.date_display(),
            day.record.duty_display(),
            day.record.time_start_display(),
            day.record.time_end_display(),
            &hours,
        ));
    }

    lines
}

fn table_row(date: &str, duty: &str, start: &str, end: &str, hours: &str) -> String {
    format!("{:<12} {:<10} {:<10} {:<10} {:<6}", date, duty, start, end, hours)
        .trim_end()
        .to_string()
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
