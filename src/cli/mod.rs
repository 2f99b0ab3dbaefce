use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use eqplot::series::{Policy, XColumn};

mod config;
mod info;
mod plot;
mod report;

/// eqplot - Equality-Saturation Benchmark Plotter
#[derive(Parser)]
#[command(name = "eqplot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Presentation transform applied to every series before plotting.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum PolicyArg {
    /// Keep points in record order
    Raw,
    /// Cumulative-maximum smoothing in record order
    #[default]
    Smoothed,
    /// Sort points ascending by x
    Sorted,
}

/// Which record column supplies the x value of each series.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum XColumnArg {
    /// The run-id suffix (iteration number)
    RunId,
    /// The swept parameter column (e-node count)
    #[default]
    Nodes,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Raw => Policy::Raw,
            PolicyArg::Smoothed => Policy::Smoothed,
            PolicyArg::Sorted => Policy::Sorted,
        }
    }
}

impl From<XColumnArg> for XColumn {
    fn from(arg: XColumnArg) -> Self {
        match arg {
            XColumnArg::RunId => XColumn::RunId,
            XColumnArg::Nodes => XColumn::Nodes,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the comparison chart and print the speedup summary
    Plot {
        /// Input benchmark CSV path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image path, .svg or .png (default: microbenchmarks.svg)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Presentation policy (raw, smoothed, sorted)
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,

        /// Which column supplies x values (run-id, nodes)
        #[arg(short = 'x', long, value_enum)]
        x_column: Option<XColumnArg>,

        /// Draw the un-transposed iteration-vs-time chart instead
        #[arg(long)]
        by_iteration: bool,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Engine label to plot; repeat for several (default: Egglog,
        /// EgglogNaive, Egg)
        #[arg(long = "engine", value_name = "LABEL")]
        engines: Vec<String>,
    },

    /// Print the speedup summary without rendering a chart
    Report {
        /// Input benchmark CSV path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Engine whose final time is the numerator (the slower engine)
        #[arg(long, default_value = "Egg")]
        numerator: String,

        /// Engine whose final time is the denominator
        #[arg(long, default_value = "EgglogNaive")]
        denominator: String,

        /// Presentation policy applied before taking final values
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,
    },

    /// Display record counts per engine label
    Info {
        /// Input benchmark CSV path
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Plot {
            input,
            output,
            policy,
            x_column,
            by_iteration,
            config,
            engines,
        } => plot::run(
            input,
            output,
            policy.map(Policy::from),
            x_column.map(XColumn::from),
            by_iteration,
            config,
            engines,
        ),
        Commands::Report {
            input,
            numerator,
            denominator,
            policy,
        } => report::run(input, numerator, denominator, policy.map(Policy::from)),
        Commands::Info { input } => info::run(input),
    }
}
