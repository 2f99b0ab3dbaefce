//! Chart rendering via `plotters`.
//!
//! The main chart is deliberately transposed: elapsed time runs along the
//! horizontal axis and the swept parameter (e-node count) along the vertical
//! axis, log-scaled with a fixed floor. The alternate by-iteration layout
//! plots run id against time on linear axes.

use crate::series::Series;
use log::info;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Errors that can occur while rendering a chart
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// Output extension is not a supported image format
    #[error("unsupported output format {0:?} (expected .svg or .png)")]
    UnsupportedFormat(String),

    /// Every series is empty, so there is nothing to plot
    #[error("no data points in any series")]
    NoData,

    /// Error from the plotters backend
    #[error("chart rendering failed: {0}")]
    Backend(String),
}

/// Chart layout variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartLayout {
    /// Transposed main chart: x = time in seconds, y = swept parameter on a
    /// log scale
    #[default]
    TimeVsNodes,
    /// Un-transposed alternate chart: x = run id, y = time in seconds,
    /// linear axes
    ByIteration,
}

/// Rendering options for [`render_chart`].
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Output image path; the extension selects the backend (`.svg`/`.png`)
    pub output: PathBuf,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Lower bound of the log-scaled parameter axis
    pub log_floor: f64,
    /// Which chart layout to draw
    pub layout: ChartLayout,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            output: PathBuf::from("microbenchmarks.svg"),
            width: 800,
            height: 600,
            log_floor: 1e4,
            layout: ChartLayout::TimeVsNodes,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Svg,
    Png,
}

fn output_format(path: &Path) -> Result<OutputFormat, PlotError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "svg" => Ok(OutputFormat::Svg),
        "png" => Ok(OutputFormat::Png),
        _ => Err(PlotError::UnsupportedFormat(ext)),
    }
}

/// Maximum x and y over every point of every series, ignoring empty series.
fn data_bounds(series: &[Series]) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for s in series {
        for &(x, y) in &s.points {
            let (bx, by) = bounds.unwrap_or((x, y));
            bounds = Some((bx.max(x), by.max(y)));
        }
    }
    bounds
}

const PALETTE: [RGBColor; 6] = [
    RGBColor(57, 106, 177),
    RGBColor(218, 124, 48),
    RGBColor(62, 150, 81),
    RGBColor(204, 37, 41),
    RGBColor(107, 76, 154),
    RGBColor(146, 36, 40),
];

fn backend_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> PlotError {
    PlotError::Backend(e.to_string())
}

/// Render every non-empty series as a line on shared axes and write the
/// image to `config.output`, overwriting any existing file.
pub fn render_chart(series: &[Series], config: &PlotConfig) -> Result<(), PlotError> {
    let format = output_format(&config.output)?;
    let size = (config.width, config.height);

    if data_bounds(series).is_none() {
        return Err(PlotError::NoData);
    }

    match format {
        OutputFormat::Svg => {
            let root = SVGBackend::new(&config.output, size).into_drawing_area();
            draw(&root, series, config)?;
            root.present().map_err(backend_err)?;
        }
        OutputFormat::Png => {
            let root = BitMapBackend::new(&config.output, size).into_drawing_area();
            draw(&root, series, config)?;
            root.present().map_err(backend_err)?;
        }
    }

    info!("wrote chart to {}", config.output.display());
    Ok(())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &[Series],
    config: &PlotConfig,
) -> Result<(), PlotError> {
    match config.layout {
        ChartLayout::TimeVsNodes => draw_transposed(root, series, config),
        ChartLayout::ByIteration => draw_by_iteration(root, series),
    }
}

/// Main chart: time horizontal, parameter vertical on a log scale.
///
/// Points arrive as `(parameter, seconds)` and are flipped when drawn.
fn draw_transposed<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &[Series],
    config: &PlotConfig,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(backend_err)?;

    let (param_max, time_max) = data_bounds(series).ok_or(PlotError::NoData)?;
    let x_max = if time_max > 0.0 { time_max * 1.05 } else { 1.0 };
    let y_max = (param_max * 1.1).max(config.log_floor * 10.0);

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d(0.0..x_max, (config.log_floor..y_max).log_scale())
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("E-node numbers")
        .draw()
        .map_err(backend_err)?;

    for (i, s) in series.iter().filter(|s| !s.is_empty()).enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        chart
            .draw_series(LineSeries::new(
                s.points.iter().map(|&(x, y)| (y, x)),
                color,
            ))
            .map_err(backend_err)?
            .label(s.name.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(backend_err)?;

    Ok(())
}

/// Alternate chart: run id horizontal, time vertical, linear axes.
fn draw_by_iteration<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &[Series],
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(backend_err)?;

    let (iter_max, time_max) = data_bounds(series).ok_or(PlotError::NoData)?;
    let x_max = if iter_max > 0.0 { iter_max * 1.05 } else { 1.0 };
    let y_max = if time_max > 0.0 { time_max * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc("Time (s)")
        .draw()
        .map_err(backend_err)?;

    for (i, s) in series.iter().filter(|s| !s.is_empty()).enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), color))
            .map_err(backend_err)?
            .label(s.name.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(backend_err)?;

    Ok(())
}
