//! CSV Row Loader Module
//! Loads the station export and filters it to summary-of-day rows using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::config::QueryConfig;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Cannot read file: {0}")]
    FileAccess(String),
    #[error("Invalid column: {0}")]
    InvalidColumn(String),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Loads and filters the raw observation table.
pub struct SodLoader;

impl SodLoader {
    /// Load a CSV file and keep only rows whose report type equals the
    /// configured SOD marker (exact match, padding included).
    ///
    /// Every column is read as a string so raw cell values survive untouched;
    /// numeric coercion happens later, per cell, in the extractor. The
    /// requested analysis column is validated against the unfiltered header
    /// before filtering so a bad column name always fails, even when no row
    /// carries the marker.
    pub fn load_filtered(
        path: &Path,
        column: &str,
        config: &QueryConfig,
    ) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::FileAccess(path.display().to_string()));
        }

        // infer_schema_length of 0 disables inference: all columns are strings
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        if !df
            .get_column_names()
            .iter()
            .any(|name| name.as_str() == column)
        {
            return Err(LoaderError::InvalidColumn(column.to_string()));
        }

        let total_rows = df.height();
        let filtered = df
            .lazy()
            .filter(col(config.report_type_column.as_str()).eq(lit(config.sod_marker.as_str())))
            .collect()?;

        debug!(
            total_rows,
            sod_rows = filtered.height(),
            "loaded and filtered station export"
        );
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const SAMPLE: &str = "\
STATION,DATE,REPORT_TYPE,HourlyDryBulbTemperature
72505,2021-01-01T00:00:00,SOD  ,50.0
72505,2021-01-01T06:00:00,FM-15,48.2
72505,2021-01-02T00:00:00,SOD  ,sixty
72505,2021-01-03T00:00:00,SOD,70
";

    #[test]
    fn keeps_only_exact_sod_marker_rows() {
        let file = write_csv(SAMPLE);
        let config = QueryConfig::default();
        let df =
            SodLoader::load_filtered(file.path(), "HourlyDryBulbTemperature", &config).unwrap();

        // the unpadded "SOD" row and the hourly FM-15 row are dropped
        assert_eq!(df.height(), 2);
        let dates: Vec<&str> = df
            .column("DATE")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(dates, ["2021-01-01T00:00:00", "2021-01-02T00:00:00"]);
    }

    #[test]
    fn unknown_column_fails_before_filtering() {
        let file = write_csv(SAMPLE);
        let config = QueryConfig::default();
        let err = SodLoader::load_filtered(file.path(), "NoSuchColumn", &config).unwrap_err();
        match err {
            LoaderError::InvalidColumn(name) => assert_eq!(name, "NoSuchColumn"),
            other => panic!("expected InvalidColumn, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let config = QueryConfig::default();
        let err =
            SodLoader::load_filtered(Path::new("/definitely/not/here.csv"), "DATE", &config)
                .unwrap_err();
        assert!(matches!(err, LoaderError::FileAccess(_)));
    }

    #[test]
    fn alternate_marker_via_config() {
        let file = write_csv(SAMPLE);
        let config = QueryConfig {
            sod_marker: "FM-15".to_string(),
            ..QueryConfig::default()
        };
        let df =
            SodLoader::load_filtered(file.path(), "HourlyDryBulbTemperature", &config).unwrap();
        assert_eq!(df.height(), 1);
    }
}
