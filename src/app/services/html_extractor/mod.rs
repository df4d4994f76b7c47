//! Roster extraction from the scheduling system's HTML export
//!
//! - [`selectors`] - compiled CSS selectors for the export's markup
//! - [`header`] - employee name and personnel number (both required)
//! - [`day_cells`] - one [`DayRecord`] per `td.day` cell
//!
//! Extraction is lenient below the header: any missing field in a day
//! cell becomes `None`. Only an unreadable document or a missing header
//! field is an error.

pub mod day_cells;
pub mod header;
pub mod selectors;

use scraper::Html;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::app::models::{DayRecord, Roster};
use crate::app::services::roster_processor::deduplicate_by_date;
use crate::error::{Result, RosterError};

pub use day_cells::extract_day_records;
pub use header::extract_header;
pub use selectors::RosterSelectors;

/// Read and extract a roster document from disk
pub fn load_roster(path: &Path) -> Result<Roster> {
    let html = fs::read_to_string(path).map_err(|e| RosterError::input_unreadable(path, e))?;
    debug!("Read {} bytes from {}", html.len(), path.display());
    extract_roster(&html)
}

/// Extract the header and deduplicated day records from an HTML string
pub fn extract_roster(html: &str) -> Result<Roster> {
    let selectors = RosterSelectors::new()?;
    let document = Html::parse_document(html);

    let header = extract_header(&document, &selectors)?;
    let records: Vec<DayRecord> = extract_day_records(&document, &selectors);
    let cell_count = records.len();
    let days = deduplicate_by_date(records);

    info!(
        "Extracted roster for {} ({}): {} day cells, {} unique days",
        header.name,
        header.personnel_number,
        cell_count,
        days.len()
    );

    Ok(Roster { header, days })
}
