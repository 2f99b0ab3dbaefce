//! # eqplot CLI
//!
//! Command-line front end for plotting equality-saturation benchmark CSV
//! output and reporting speedup ratios.
//!
//! ```bash
//! # Render the comparison chart and print the speedup summary
//! eqplot plot benchmarks.csv microbenchmarks.svg
//!
//! # Variant with x-sorted series instead of smoothing, as a PNG
//! eqplot plot benchmarks.csv plot.png --policy sorted
//!
//! # Just the speedup summary
//! eqplot report benchmarks.csv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
