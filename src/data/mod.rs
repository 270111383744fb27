//! Data module - CSV loading and series extraction

mod loader;
mod series;

pub use loader::{LoaderError, SodLoader};
pub use series::{date_stamp, tolerant_parse, SeriesError, SeriesExtractor};
