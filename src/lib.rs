//! # eqplot - Equality-Saturation Benchmark Plotting
//!
//! `eqplot` post-processes the CSV output of equality-saturation benchmark
//! runs ("Egglog", "EgglogNaive", "Egg", or any other engine label) into
//! comparison line charts and a printed speedup summary.
//!
//! ## Pipeline
//!
//! The tool is a strictly linear pipeline over in-memory data:
//!
//! 1. [`loader`]: decode the headerless benchmark CSV into typed [`loader::Record`]s.
//! 2. [`series`]: filter records by engine label into `(x, y)` series
//!    (elapsed nanoseconds become seconds), then apply one of the
//!    [`series::Policy`] transforms - cumulative-maximum smoothing or an
//!    x-ascending sort.
//! 3. [`plot`]: render the series as lines on shared axes with `plotters`,
//!    writing an SVG or PNG file.
//! 4. [`report`]: compute the speedup ratio between two engines' final
//!    data points.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eqplot::loader::load_records;
//! use eqplot::series::{Policy, Series, XColumn};
//! use eqplot::report::speedup;
//!
//! let records = load_records("benchmarks.csv".as_ref())?;
//!
//! let mut egg = Series::extract(&records, "Egg", XColumn::Nodes);
//! let mut naive = Series::extract(&records, "EgglogNaive", XColumn::Nodes);
//! egg.apply(Policy::Smoothed);
//! naive.apply(Policy::Smoothed);
//!
//! let ratio = speedup(&egg, &naive)?;
//! println!("EgglogNaive speedup over egg: {ratio}");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Input Format
//!
//! One record per line, no header row, comma-delimited:
//!
//! ```text
//! run-000010,Egglog,5000000000,71234
//! ```
//!
//! | Column | Meaning |
//! |--------|---------|
//! | 0 | run id with a fixed 9-character prefix, integer suffix |
//! | 1 | engine label (open string set) |
//! | 2 | elapsed time in nanoseconds |
//! | 3 | swept parameter (e-node count or similar) |

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod loader;
pub mod plot;
pub mod report;
pub mod series;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::loader::{load_records, LoadError, Record};
    pub use crate::plot::{render_chart, ChartLayout, PlotConfig, PlotError};
    pub use crate::report::{speedup, ReportError};
    pub use crate::series::{Policy, Series, XColumn};
}
