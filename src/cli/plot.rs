use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

use eqplot::loader::load_records;
use eqplot::plot::{render_chart, ChartLayout, PlotConfig};
use eqplot::report::speedup;
use eqplot::series::{Policy, Series, XColumn};

use crate::cli::config::Config;

/// Engines plotted when neither the CLI nor the config names any.
const DEFAULT_ENGINES: [&str; 3] = ["Egglog", "EgglogNaive", "Egg"];

/// Legend names used by the paper figures.
fn display_name(label: &str) -> &str {
    match label {
        "Egglog" => "EqLog",
        "EgglogNaive" => "EqLogNI",
        "Egg" => "egg",
        other => other,
    }
}

/// Full pipeline: load, extract per-engine series, transform, render,
/// print the speedup summary.
#[allow(clippy::too_many_arguments)]
pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    policy: Option<Policy>,
    x_column: Option<XColumn>,
    by_iteration: bool,
    config: Option<PathBuf>,
    engines: Vec<String>,
) -> Result<()> {
    let file_config = match config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    let section = file_config.plot;
    let defaults = PlotConfig::default();

    let policy = policy.or(section.policy).unwrap_or_default();
    let x_column = x_column.or(section.x_column).unwrap_or_default();
    let engines = if engines.is_empty() {
        section
            .engines
            .unwrap_or_else(|| DEFAULT_ENGINES.iter().map(|s| s.to_string()).collect())
    } else {
        engines
    };

    let plot_config = PlotConfig {
        output: output.or(section.output).unwrap_or(defaults.output),
        width: section.width.unwrap_or(defaults.width),
        height: section.height.unwrap_or(defaults.height),
        log_floor: section.log_floor.unwrap_or(defaults.log_floor),
        layout: if by_iteration {
            ChartLayout::ByIteration
        } else {
            ChartLayout::TimeVsNodes
        },
    };

    let records = load_records(&input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    info!("loaded {} records from {}", records.len(), input.display());

    let pairs: Vec<(String, Series)> = engines
        .iter()
        .map(|label| {
            let mut series = Series::extract(&records, label, x_column);
            series.apply(policy);
            debug!("{label}: {} points", series.len());
            (label.clone(), series)
        })
        .collect();

    let chart_series: Vec<Series> = pairs
        .iter()
        .map(|(label, series)| series.clone().with_name(display_name(label)))
        .collect();
    render_chart(&chart_series, &plot_config)
        .with_context(|| format!("failed to render {}", plot_config.output.display()))?;

    let find = |label: &str| pairs.iter().find(|(l, _)| l == label).map(|(_, s)| s);
    if let (Some(egg), Some(naive)) = (find("Egg"), find("EgglogNaive")) {
        let ratio = speedup(egg, naive).context("speedup report")?;
        println!("EgglogNaive speedup over egg: {ratio}");
    } else {
        debug!("skipping speedup summary: Egg/EgglogNaive not both plotted");
    }

    Ok(())
}
