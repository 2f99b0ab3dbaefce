use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

use eqplot::loader::load_records;

/// Display record counts and final times per engine label.
pub fn run(input: PathBuf) -> Result<()> {
    let records = load_records(&input)
        .with_context(|| format!("failed to load {}", input.display()))?;

    println!("File: {}", input.display());
    println!("Records: {}", records.len());

    let mut per_engine: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for record in &records {
        let entry = per_engine.entry(record.engine.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 = record.time_ns / 1e9;
    }

    for (engine, (count, last_secs)) in per_engine {
        println!("  {engine}: {count} records, final time {last_secs:.3} s");
    }

    Ok(())
}
