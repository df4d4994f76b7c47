//! Command-line argument definitions for the roster report tool
//!
//! Defines the CLI using the clap derive API. Running with no arguments
//! reads `untitled.html` and writes the report into the current directory.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ReportConfig;
use crate::constants::DEFAULT_INPUT_FILE;

/// CLI arguments for the roster report tool
///
/// Extracts one employee's duty roster from a scheduling-system HTML
/// export and writes a statistical summary plus the schedule table.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "roster-report",
    version,
    about = "Summarise a personal duty roster exported as HTML",
    long_about = "Reads a duty roster exported from the scheduling system as HTML, classifies \
                  every day as rest day or shift, counts destinations and overnight shifts, \
                  totals worked hours and writes the summary and schedule to a text file and \
                  to standard output."
)]
pub struct Args {
    /// Roster HTML export to read
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_FILE)]
    pub input_path: PathBuf,

    /// Directory the report file is written into
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory for the generated report file"
    )]
    pub output_dir: PathBuf,

    /// Do not write the report file
    #[arg(long = "no-file", conflicts_with = "no_console")]
    pub no_file: bool,

    /// Do not print the report to standard output
    #[arg(long = "no-console")]
    pub no_console: bool,

    /// Disable coloured status output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only log errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl From<&Args> for ReportConfig {
    fn from(args: &Args) -> Self {
        let mut config = ReportConfig::default()
            .with_input_path(&args.input_path)
            .with_output_dir(&args.output_dir);
        if args.no_file {
            config = config.without_file();
        }
        if args.no_console {
            config = config.without_console();
        }
        if args.no_color {
            config = config.without_color();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_behaviour() {
        let args = Args::try_parse_from(["roster-report"]).unwrap();
        assert_eq!(args.input_path, PathBuf::from("untitled.html"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(ReportConfig::from(&args), ReportConfig::default());
    }

    #[test]
    fn test_log_levels() {
        let args = Args::try_parse_from(["roster-report", "-vv"]).unwrap();
        assert_eq!(args.get_log_level(), "debug");

        let args = Args::try_parse_from(["roster-report", "-q"]).unwrap();
        assert_eq!(args.get_log_level(), "error");

        assert!(Args::try_parse_from(["roster-report", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_args_into_config() {
        let args = Args::try_parse_from([
            "roster-report",
            "march.html",
            "-o",
            "reports",
            "--no-console",
            "--no-color",
        ])
        .unwrap();
        let config = ReportConfig::from(&args);

        assert_eq!(config.input_path, PathBuf::from("march.html"));
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert!(config.write_file);
        assert!(!config.print_console);
        assert!(!config.color);
    }

    #[test]
    fn test_cannot_disable_both_outputs() {
        assert!(Args::try_parse_from(["roster-report", "--no-file", "--no-console"]).is_err());
    }
}
