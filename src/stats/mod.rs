//! Stats module - aggregates and duplicate analysis

mod calculator;

pub use calculator::{SeriesStats, StatsError};
