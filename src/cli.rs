//! Command-line Interface Module
//! Argument definitions for the `sodstat` binary.

use clap::Parser;
use std::path::PathBuf;

/// Analyze one numeric column of a weather-station CSV export.
///
/// Only once-daily "Summary Of Day" (SOD) rows are considered.
#[derive(Debug, Parser)]
#[command(name = "sodstat", version, about)]
pub struct Cli {
    /// Path to the station CSV export
    pub file: PathBuf,

    /// Observation column to analyze
    pub column: String,

    /// One of: list, min, max, avg, chart, repeats
    pub operation: String,
}
