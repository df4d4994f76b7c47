//! Configuration management and validation.
//!
//! Provides the report configuration: where to read the roster export,
//! where to write the report, and which output surfaces are enabled.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::DEFAULT_INPUT_FILE;
use crate::error::{Result, RosterError};

/// Configuration for a single report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Roster HTML export to read
    pub input_path: PathBuf,

    /// Directory the report file is written into
    pub output_dir: PathBuf,

    /// Write the report file
    pub write_file: bool,

    /// Print statistics and schedule to standard output
    pub print_console: bool,

    /// Colour console status lines
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from("."),
            write_file: true,
            print_console: true,
            color: true,
        }
    }
}

impl ReportConfig {
    /// Set the roster document to read
    pub fn with_input_path(mut self, input_path: impl Into<PathBuf>) -> Self {
        self.input_path = input_path.into();
        self
    }

    /// Set the directory for the report file
    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    /// Skip writing the report file
    pub fn without_file(mut self) -> Self {
        self.write_file = false;
        self
    }

    /// Skip printing the console report
    pub fn without_console(mut self) -> Self {
        self.print_console = false;
        self
    }

    /// Disable coloured status output
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Check the configuration before any input is read
    pub fn validate(&self) -> Result<()> {
        if !self.write_file && !self.print_console {
            return Err(RosterError::configuration(
                "both the report file and console output are disabled",
            ));
        }

        if self.write_file && !self.output_dir.is_dir() {
            return Err(RosterError::configuration(format!(
                "output directory does not exist: {}",
                self.output_dir.display()
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.input_path, PathBuf::from("untitled.html"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.write_file);
        assert!(config.print_console);
        assert!(config.color);
    }

    #[test]
    fn test_builder_methods() {
        let config = ReportConfig::default()
            .with_input_path("march.html")
            .with_output_dir("/tmp")
            .without_console()
            .without_color();

        assert_eq!(config.input_path, PathBuf::from("march.html"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp"));
        assert!(config.write_file);
        assert!(!config.print_console);
        assert!(!config.color);
    }

    #[test]
    fn test_validate_requires_an_output() {
        let config = ReportConfig::default().without_file().without_console();
        assert!(matches!(
            config.validate(),
            Err(RosterError::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = ReportConfig::default().with_output_dir(temp_dir.path());
        assert!(config.validate().is_ok());

        let config = ReportConfig::default().with_output_dir(temp_dir.path().join("nope"));
        assert!(config.validate().is_err());

        // Missing directory is irrelevant when no file is written
        let config = ReportConfig::default()
            .with_output_dir(temp_dir.path().join("nope"))
            .without_file();
        assert!(config.validate().is_ok());
    }
}
