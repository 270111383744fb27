//! Chart Plotter Module
//! Renders the time-series line chart as a PNG using plotters.

use plotters::prelude::*;
use thiserror::Error;

use crate::config::QueryConfig;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to render chart: {0}")]
    Render(String),
}

/// Renders a value-over-date line chart at the configured figure size.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Draw `values` against their `dates` (same length) and write the image
    /// to the configured output path. The column name labels the y-axis and
    /// date ticks are rotated 90 degrees, matching the station report style.
    pub fn render_line_chart(
        values: &[f64],
        dates: &[String],
        column: &str,
        config: &QueryConfig,
    ) -> Result<(), ChartError> {
        let root = BitMapBackend::new(
            &config.chart_output,
            (config.figure_width, config.figure_height),
        )
        .into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ChartError::Render(e.to_string()))?;

        let (y_min, y_max) = y_range(values);
        let x_max = values.len().saturating_sub(1).max(1);

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(110)
            .y_label_area_size(60)
            .build_cartesian_2d(0..x_max, y_min..y_max)
            .map_err(|e| ChartError::Render(e.to_string()))?;

        chart
            .configure_mesh()
            .x_labels(dates.len().clamp(1, 30))
            .x_label_formatter(&|idx| dates.get(*idx).cloned().unwrap_or_default())
            .x_label_style(
                ("sans-serif", 11)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .x_desc("Date")
            .y_desc(column)
            .draw()
            .map_err(|e| ChartError::Render(e.to_string()))?;

        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(i, &v)| (i, v)),
                &BLUE,
            ))
            .map_err(|e| ChartError::Render(e.to_string()))?;

        root.present()
            .map_err(|e| ChartError::Render(e.to_string()))?;
        Ok(())
    }
}

/// Y-axis bounds with padding, widened when the series is flat or empty.
fn y_range(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if !v.is_nan() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_infinite() {
        return (0.0, 1.0);
    }
    let pad = ((max - min) * 0.1).max(0.5);
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_range_pads_and_handles_degenerate_input() {
        let (lo, hi) = y_range(&[50.0, 70.0]);
        assert!(lo < 50.0 && hi > 70.0);

        // flat series still produces a non-empty range
        let (lo, hi) = y_range(&[5.0, 5.0]);
        assert!(lo < hi);

        assert_eq!(y_range(&[]), (0.0, 1.0));
    }
}
