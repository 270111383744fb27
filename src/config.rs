//! Query Configuration Module
//! Static settings shared by the loader, dispatcher and chart renderer.

use std::path::PathBuf;

/// Report-type marker for once-daily "Summary Of Day" rows.
///
/// The dataset pads the field to five characters, so the trailing spaces are
/// part of the value. Matching is exact, never trimmed.
pub const SOD_MARKER: &str = "SOD  ";

/// Settings for one query invocation.
///
/// Tests construct alternate configurations (different markers, different
/// chart paths) instead of patching globals.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Column holding the report-type classification.
    pub report_type_column: String,
    /// Column holding the ISO-8601-like observation timestamp.
    pub date_column: String,
    /// Exact cell value marking a summary-of-day row.
    pub sod_marker: String,
    /// Chart figure width in pixels.
    pub figure_width: u32,
    /// Chart figure height in pixels.
    pub figure_height: u32,
    /// Where the `chart` operation writes its PNG.
    pub chart_output: PathBuf,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            report_type_column: "REPORT_TYPE".to_string(),
            date_column: "DATE".to_string(),
            sod_marker: SOD_MARKER.to_string(),
            // Original figure was 9x4 inches at 100 DPI.
            figure_width: 900,
            figure_height: 400,
            chart_output: PathBuf::from("chart.png"),
        }
    }
}
