//! Benchmark CSV decoding.
//!
//! The harness writes one line per measurement with no header row:
//! `run-000010,Egglog,5000000000,71234`. Every row is decoded into a typed
//! [`Record`] up front so the transform code never touches raw column
//! indices. Any malformed row aborts the load with the offending line
//! number; there is no skip-and-continue mode.

use log::debug;
use std::path::{Path, PathBuf};

/// Length of the fixed prefix on the run-id column; everything after it
/// parses as an integer.
pub const RUN_ID_PREFIX_LEN: usize = 9;

/// Errors that can occur while loading the benchmark CSV
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Input file could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path that was passed to the loader
        path: PathBuf,
        /// Underlying CSV/IO error
        source: csv::Error,
    },

    /// Error reading a row from the CSV stream
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    /// Row has fewer than the four required columns
    #[error("line {line}: expected 4 columns, found {found}")]
    ShortRow {
        /// 1-based line number
        line: u64,
        /// Number of columns actually present
        found: usize,
    },

    /// Run-id column is too short or its suffix is not an integer
    #[error("line {line}: malformed run id {value:?}")]
    BadRunId {
        /// 1-based line number
        line: u64,
        /// Raw column content
        value: String,
    },

    /// A numeric column failed to parse
    #[error("line {line}: malformed {column} value {value:?}")]
    BadNumber {
        /// 1-based line number
        line: u64,
        /// Which column failed (`time_ns` or `nodes`)
        column: &'static str,
        /// Raw column content
        value: String,
    },
}

/// One benchmark measurement, decoded from a single CSV row.
///
/// Immutable once parsed; the loaded sequence preserves file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Integer suffix of the run-id column
    pub run_id: u64,
    /// Engine label (open string set; `Egglog`, `EgglogNaive`, `Egg`, ...)
    pub engine: String,
    /// Elapsed time in nanoseconds
    pub time_ns: f64,
    /// Swept parameter for this measurement (e-node count or similar)
    pub nodes: f64,
}

/// Load all records from a headerless benchmark CSV, in file order.
///
/// Fails on the first malformed row. The output length always equals the
/// number of input lines.
pub fn load_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let line = index as u64 + 1;
        let row = row?;
        records.push(parse_row(&row, line)?);
    }

    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn parse_row(row: &csv::StringRecord, line: u64) -> Result<Record, LoadError> {
    if row.len() < 4 {
        return Err(LoadError::ShortRow {
            line,
            found: row.len(),
        });
    }

    let run_id = row[0]
        .get(RUN_ID_PREFIX_LEN..)
        .and_then(|suffix| suffix.parse::<u64>().ok())
        .ok_or_else(|| LoadError::BadRunId {
            line,
            value: row[0].to_string(),
        })?;

    let time_ns = parse_f64(&row[2], line, "time_ns")?;
    let nodes = parse_f64(&row[3], line, "nodes")?;

    Ok(Record {
        run_id,
        engine: row[1].to_string(),
        time_ns,
        nodes,
    })
}

fn parse_f64(field: &str, line: u64, column: &'static str) -> Result<f64, LoadError> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| LoadError::BadNumber {
            line,
            column,
            value: field.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load_str(content: &str) -> Result<Vec<Record>, LoadError> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        load_records(file.path())
    }

    #[test]
    fn test_load_basic() {
        let records =
            load_str("run-00000010,Egg,5000000000,7\nrun-00000020,Egglog,3000000000,9\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            Record {
                run_id: 10,
                engine: "Egg".to_string(),
                time_ns: 5_000_000_000.0,
                nodes: 7.0,
            }
        );
        assert_eq!(records[1].run_id, 20);
        assert_eq!(records[1].engine, "Egglog");
    }

    #[test]
    fn test_prefix_is_nine_bytes() {
        // "run-000010" strips to "0", not "10": the prefix length is fixed
        // at 9 bytes, not everything up to the dash.
        let records = load_str("run-000010,Egg,1,1\n").unwrap();
        assert_eq!(records[0].run_id, 0);
    }

    #[test]
    fn test_preserves_file_order() {
        let records =
            load_str("run-00000030,Egg,1,1\nrun-00000010,Egg,2,2\nrun-00000020,Egg,3,3\n")
                .unwrap();
        let ids: Vec<u64> = records.iter().map(|r| r.run_id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_short_row() {
        let err = load_str("run-000010,Egg,5000000000\n").unwrap_err();
        assert!(matches!(err, LoadError::ShortRow { line: 1, found: 3 }));
    }

    #[test]
    fn test_bad_run_id_prefix_too_short() {
        let err = load_str("run-1,Egg,1,1\n").unwrap_err();
        assert!(matches!(err, LoadError::BadRunId { line: 1, .. }));
    }

    #[test]
    fn test_bad_run_id_non_numeric_suffix() {
        let err = load_str("run-0000xy,Egg,1,1\n").unwrap_err();
        assert!(matches!(err, LoadError::BadRunId { line: 1, .. }));
    }

    #[test]
    fn test_bad_time_reports_line() {
        let err = load_str("run-000010,Egg,1,1\nrun-000020,Egg,oops,1\n").unwrap_err();
        match err {
            LoadError::BadNumber { line, column, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, "time_ns");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_records(Path::new("/nonexistent/benchmarks.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn test_numeric_round_trip() {
        let records = load_str("run-00000042,Egg,123456789.5,98765.25\n").unwrap();
        let r = &records[0];
        assert_eq!(r.run_id, format!("{}", r.run_id).parse::<u64>().unwrap());
        assert_eq!(r.time_ns, format!("{}", r.time_ns).parse::<f64>().unwrap());
        assert_eq!(r.nodes, format!("{}", r.nodes).parse::<f64>().unwrap());
    }
}
