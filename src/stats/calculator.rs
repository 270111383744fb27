//! Statistics Calculator Module
//! Aggregates and duplicate analysis over an extracted value series.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("No numeric values in series")]
    EmptySeries,
}

/// Handles aggregate and duplicate calculations over `f64` series.
pub struct SeriesStats;

impl SeriesStats {
    /// Minimum of the series; an empty series is an error, not a sentinel.
    pub fn min(values: &[f64]) -> Result<f64, StatsError> {
        values
            .iter()
            .copied()
            .reduce(f64::min)
            .ok_or(StatsError::EmptySeries)
    }

    /// Maximum of the series; an empty series is an error, not a sentinel.
    pub fn max(values: &[f64]) -> Result<f64, StatsError> {
        values
            .iter()
            .copied()
            .reduce(f64::max)
            .ok_or(StatsError::EmptySeries)
    }

    /// Arithmetic mean of the series; rejects empty input instead of
    /// dividing by zero.
    pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptySeries);
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Values occurring more than once, in discovery order.
    ///
    /// Each occurrence beyond the first records one entry, so a value seen
    /// three times appears twice in the result. Pairwise comparison is fine
    /// at this scale (one station, one year of daily rows).
    pub fn duplicates(values: &[f64]) -> Vec<f64> {
        let mut seen: Vec<f64> = Vec::new();
        let mut dupes: Vec<f64> = Vec::new();
        for &value in values {
            if seen.iter().any(|&s| s == value) {
                dupes.push(value);
            } else {
                seen.push(value);
            }
        }
        dupes
    }

    /// First occurrence of each distinct value, in original order.
    pub fn deduplicate(values: &[f64]) -> Vec<f64> {
        let mut seen: Vec<f64> = Vec::new();
        for &value in values {
            if !seen.iter().any(|&s| s == value) {
                seen.push(value);
            }
        }
        seen
    }
}
