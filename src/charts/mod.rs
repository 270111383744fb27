//! Charts module - Chart rendering

mod plotter;

pub use plotter::{ChartError, ChartRenderer};
