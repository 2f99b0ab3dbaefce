use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use eqplot::loader::load_records;
use eqplot::report::speedup;
use eqplot::series::{Policy, Series, XColumn};

/// Print the speedup of `denominator` over `numerator` from their final
/// data points.
pub fn run(
    input: PathBuf,
    numerator: String,
    denominator: String,
    policy: Option<Policy>,
) -> Result<()> {
    let policy = policy.unwrap_or_default();

    let records = load_records(&input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    info!("loaded {} records from {}", records.len(), input.display());

    let mut num = Series::extract(&records, &numerator, XColumn::Nodes);
    let mut den = Series::extract(&records, &denominator, XColumn::Nodes);
    num.apply(policy);
    den.apply(policy);

    let ratio = speedup(&num, &den).context("speedup report")?;
    println!("{denominator} speedup over {numerator}: {ratio}");

    Ok(())
}
