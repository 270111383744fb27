//! Series Extraction Module
//! Turns filtered rows into numeric series and correlated date stamps.

use polars::prelude::*;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Parse one raw cell as a float, yielding nothing on malformed input.
///
/// Raw weather cells frequently hold non-numeric placeholders ("T" for trace
/// precipitation, "*", empty strings). Those contribute no value rather than
/// failing the query.
pub fn tolerant_parse(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}

/// Extracts value and date series from the filtered observation table.
pub struct SeriesExtractor;

impl SeriesExtractor {
    /// Collect the numeric values of `column`, in row order, skipping cells
    /// that do not parse. Output length is at most the row count.
    pub fn extract_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, SeriesError> {
        let cells = df.column(column)?.str()?;
        let values: Vec<f64> = cells
            .into_iter()
            .flatten()
            .filter_map(tolerant_parse)
            .collect();

        debug!(rows = df.height(), values = values.len(), column, "extracted series");
        Ok(values)
    }

    /// Collect the date stamp of every row whose `column` value parses and
    /// equals one of `match_values`, in row order.
    ///
    /// Correlation is by value, not by row index: rows sharing a value each
    /// emit a date, even when `match_values` was de-duplicated upstream. This
    /// matches the behavior the dataset's existing reports were built on.
    pub fn correlate_dates(
        df: &DataFrame,
        column: &str,
        match_values: &[f64],
        date_column: &str,
    ) -> Result<Vec<String>, SeriesError> {
        let cells = df.column(column)?.str()?;
        let dates = df.column(date_column)?.str()?;

        let mut stamps = Vec::new();
        for (cell, date) in cells.into_iter().zip(dates.into_iter()) {
            let (Some(cell), Some(date)) = (cell, date) else {
                continue;
            };
            if let Some(value) = tolerant_parse(cell) {
                if match_values.iter().any(|&m| m == value) {
                    stamps.push(date_stamp(date).to_string());
                }
            }
        }
        Ok(stamps)
    }
}

/// Truncate a combined date-time stamp at the first `T`, keeping the date.
/// A stamp without a `T` separator is returned whole.
pub fn date_stamp(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}
