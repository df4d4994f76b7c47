//! Command execution for the roster report CLI
//!
//! Sets up logging, validates configuration and runs the single-pass
//! pipeline: extract, classify and aggregate, then write.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::app::services::html_extractor::load_roster;
use crate::app::services::report_writer::ReportWriter;
use crate::app::services::roster_processor::{ProcessingResult, process_roster};
use crate::cli::args::Args;
use crate::config::ReportConfig;

/// Main command runner
///
/// Nothing is written unless extraction succeeds, so a fatal input
/// error never leaves a partial report behind.
pub fn run(args: Args) -> Result<Option<PathBuf>> {
    setup_logging(&args)?;

    let config = ReportConfig::from(&args);
    run_with_config(&config).map(|(_, written)| written)
}

/// Run the pipeline for an already-built configuration
pub fn run_with_config(config: &ReportConfig) -> Result<(ProcessingResult, Option<PathBuf>)> {
    config.validate().context("Invalid configuration")?;
    if !config.color {
        colored::control::set_override(false);
    }

    info!("Reading roster from {}", config.input_path.display());
    let roster = load_roster(&config.input_path).with_context(|| {
        format!(
            "Failed to extract roster from {}",
            config.input_path.display()
        )
    })?;

    let result = process_roster(&roster);

    let writer = ReportWriter::from_config(config);
    debug!("Writing report into {}", writer.output_dir().display());
    let written = writer
        .write(&roster, &result)
        .context("Failed to write report")?;

    Ok((result, written))
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster_report={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
