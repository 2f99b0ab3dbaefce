//! TOML configuration file support.
//!
//! Instead of passing many CLI flags, users can specify settings in a config
//! file; explicit CLI flags still win over config values:
//!
//! ```toml
//! # eqplot.toml
//! [plot]
//! policy = "smoothed"
//! x_column = "nodes"
//! engines = ["Egglog", "EgglogNaive", "Egg"]
//! output = "microbenchmarks.svg"
//! width = 800
//! height = 600
//! log_floor = 10000.0
//! ```

use anyhow::{Context, Result};
use eqplot::series::{Policy, XColumn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration structure for eqplot.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Plot-specific settings.
    #[serde(default)]
    pub plot: PlotSection,
}

/// Configuration for the plot command.
#[derive(Debug, Default, Deserialize)]
pub struct PlotSection {
    /// Presentation policy (raw, smoothed, sorted).
    pub policy: Option<Policy>,

    /// Which record column supplies x values (run_id, nodes).
    pub x_column: Option<XColumn>,

    /// Engine labels to plot, in legend order.
    pub engines: Option<Vec<String>>,

    /// Output image path.
    pub output: Option<PathBuf>,

    /// Image width in pixels.
    pub width: Option<u32>,

    /// Image height in pixels.
    pub height: Option<u32>,

    /// Lower bound of the log-scaled parameter axis.
    pub log_floor: Option<f64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
