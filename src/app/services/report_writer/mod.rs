//! Report rendering and output
//!
//! - [`filename`] - output filename from the employee and date range
//! - [`render`] - statistics block, schedule table and the two report surfaces
//! - [`writer`] - writes the file report and prints the console report

pub mod filename;
pub mod render;
pub mod writer;

pub use filename::report_filename;
pub use render::{render_console_report, render_file_report};
pub use writer::ReportWriter;
