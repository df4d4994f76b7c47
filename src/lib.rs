//! Roster Report Library
//!
//! Extracts a personal duty roster from an HTML export of a scheduling
//! system and produces a statistical summary plus a formatted schedule.
//!
//! This library provides tools for:
//! - Extracting the employee header and day cells from the HTML export
//! - Classifying duty codes into rest days, shifts and empty days
//! - Detecting overnight shifts and computing worked hours across midnight
//! - Aggregating counts, percentages and hour figures in a single pass
//! - Rendering the report to a text file and to standard output

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod html_extractor;
        pub mod report_writer;
        pub mod roster_processor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ClassifiedDay, DayRecord, Destination, DutyCategory, Roster};
pub use app::services::roster_processor::RosterStats;
pub use config::ReportConfig;
pub use error::{Result, RosterError};
