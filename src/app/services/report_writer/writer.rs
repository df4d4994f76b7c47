//! Report output to the filesystem and the console

use chrono::{Local, NaiveDateTime};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::filename::report_filename;
use super::render::{render_console_report, render_file_report};
use crate::app::models::Roster;
use crate::app::services::roster_processor::ProcessingResult;
use crate::config::ReportConfig;
use crate::error::{Result, RosterError};

/// Writes the roster report to the enabled output surfaces
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
    write_file: bool,
    print_console: bool,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            write_file: true,
            print_console: true,
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            write_file: config.write_file,
            print_console: config.print_console,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the file report and print the console report as configured
    ///
    /// Returns the path of the written file, if one was written.
    pub fn write(&self, roster: &Roster, result: &ProcessingResult) -> Result<Option<PathBuf>> {
        let written = if self.write_file {
            let path = self.write_file_report(roster, result, Local::now().naive_local())?;
            println!(
                "{} {}",
                "Output written to".bright_green(),
                path.display().to_string().bright_white().bold()
            );
            Some(path)
        } else {
            None
        };

        if self.print_console {
            println!();
            print!("{}", render_console_report(&result.days, &result.stats));
        }

        Ok(written)
    }

    /// Render the file report and write it into the output directory
    pub fn write_file_report(
        &self,
        roster: &Roster,
        result: &ProcessingResult,
        generated_at: NaiveDateTime,
    ) -> Result<PathBuf> {
        let path = self.output_dir.join(report_filename(roster));
        let report = render_file_report(roster, &result.days, &result.stats, generated_at);

        debug!("Writing {} bytes to {}", report.len(), path.display());
        fs::write(&path, report).map_err(|e| RosterError::output_write(&path, e))?;
        info!("Report written to {}", path.display());

        Ok(path)
    }
}
