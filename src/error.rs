//! Error handling for roster extraction and report generation.
//!
//! Only input-level problems are fatal: an unreadable document or a
//! missing header field. Per-row gaps never surface here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Cannot read roster document at {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Roster document is missing required header field: {field}")]
    MissingHeaderField { field: String },

    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Failed to write report to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl RosterError {
    /// Create an unreadable-input error for `path`
    pub fn input_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a missing header field error
    pub fn missing_header_field(field: impl Into<String>) -> Self {
        Self::MissingHeaderField {
            field: field.into(),
        }
    }

    /// Create an invalid selector error
    pub fn invalid_selector(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
