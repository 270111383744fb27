//! Query Dispatcher Module
//! Maps an operation name onto the load/extract/analyze pipeline.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::charts::ChartRenderer;
use crate::config::QueryConfig;
use crate::data::{SeriesExtractor, SodLoader};
use crate::stats::SeriesStats;

/// The closed set of supported query operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Min,
    Max,
    Avg,
    Chart,
    Repeats,
}

impl Operation {
    /// Resolve a user-supplied operation name; `None` for anything outside
    /// the supported set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "list" => Some(Self::List),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "avg" => Some(Self::Avg),
            "chart" => Some(Self::Chart),
            "repeats" => Some(Self::Repeats),
            _ => None,
        }
    }
}

/// Run one query and return the line to print.
///
/// The file is parsed and filtered exactly once; every downstream step works
/// off the cached frame.
pub fn run_query(
    file: &Path,
    column: &str,
    operation: Operation,
    config: &QueryConfig,
) -> Result<String> {
    let df = SodLoader::load_filtered(file, column, config)?;
    let values = SeriesExtractor::extract_values(&df, column)?;
    debug!(?operation, column, values = values.len(), "dispatching query");

    let line = match operation {
        Operation::List => format!("{values:?}"),
        Operation::Min => SeriesStats::min(&values)
            .with_context(|| format!("min over column {column}"))?
            .to_string(),
        Operation::Max => SeriesStats::max(&values)
            .with_context(|| format!("max over column {column}"))?
            .to_string(),
        Operation::Avg => SeriesStats::mean(&values)
            .with_context(|| format!("avg over column {column}"))?
            .to_string(),
        Operation::Chart => {
            let dates =
                SeriesExtractor::correlate_dates(&df, column, &values, &config.date_column)?;
            ChartRenderer::render_line_chart(&values, &dates, column, config)?;
            format!("Chart written to {}", config.chart_output.display())
        }
        Operation::Repeats => {
            let repeats = SeriesStats::deduplicate(&SeriesStats::duplicates(&values));
            format!("{repeats:?}")
        }
    };
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LoaderError;
    use std::io::Write;

    const SAMPLE: &str = "\
STATION,DATE,REPORT_TYPE,HourlyDryBulbTemperature,Remarks
72505,2021-01-01T00:00:00,SOD  ,50.0,clear
72505,2021-01-01T06:00:00,FM-15,48.2,hourly
72505,2021-01-02T00:00:00,SOD  ,sixty,malformed
72505,2021-01-03T00:00:00,SOD  ,50.0,clear
72505,2021-01-04T00:00:00,SOD  ,70,warm
";

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn run(op: Operation, column: &str) -> Result<String> {
        let file = write_csv(SAMPLE);
        let config = QueryConfig::default();
        run_query(file.path(), column, op, &config)
    }

    #[test]
    fn operation_names_resolve_exactly() {
        assert_eq!(Operation::from_name("list"), Some(Operation::List));
        assert_eq!(Operation::from_name("repeats"), Some(Operation::Repeats));
        assert_eq!(Operation::from_name("LIST"), None);
        assert_eq!(Operation::from_name("median"), None);
    }

    #[test]
    fn list_prints_extracted_values() {
        let line = run(Operation::List, "HourlyDryBulbTemperature").unwrap();
        assert_eq!(line, "[50.0, 50.0, 70.0]");
    }

    #[test]
    fn aggregates_print_single_values() {
        assert_eq!(run(Operation::Min, "HourlyDryBulbTemperature").unwrap(), "50");
        assert_eq!(run(Operation::Max, "HourlyDryBulbTemperature").unwrap(), "70");
        let avg: f64 = run(Operation::Avg, "HourlyDryBulbTemperature")
            .unwrap()
            .parse()
            .unwrap();
        assert!((avg - 56.666666666666664).abs() < 1e-12);
    }

    #[test]
    fn repeats_collapses_each_repeated_value_once() {
        let line = run(Operation::Repeats, "HourlyDryBulbTemperature").unwrap();
        assert_eq!(line, "[50.0]");
    }

    #[test]
    fn avg_over_all_malformed_column_is_an_empty_series_error() {
        // every SOD cell in Remarks is non-numeric
        let err = run(Operation::Avg, "Remarks").unwrap_err();
        assert!(err
            .downcast_ref::<crate::stats::StatsError>()
            .is_some());
    }

    #[test]
    fn unknown_column_surfaces_invalid_column() {
        let err = run(Operation::List, "DewPoint").unwrap_err();
        match err.downcast_ref::<LoaderError>() {
            Some(LoaderError::InvalidColumn(name)) => assert_eq!(name, "DewPoint"),
            other => panic!("expected InvalidColumn, got {other:?}"),
        }
    }
}
