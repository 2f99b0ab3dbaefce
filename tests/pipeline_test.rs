//! End-to-end pipeline tests over scratch CSV files: load, extract,
//! transform, report.

use eqplot::loader::{load_records, LoadError};
use eqplot::report::{speedup, ReportError};
use eqplot::series::{Policy, Series, XColumn};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_csv(lines: &[&str]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("benchmarks.csv");
    let mut file = File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    (dir, path)
}

#[test]
fn test_full_pipeline_smoothed() {
    let (_dir, path) = write_csv(&[
        "run-000010,Egg,5000000000,7",
        "run-000020,Egg,3000000000,9",
        "run-000010,EgglogNaive,1000000000,7",
        "run-000020,EgglogNaive,1000000000,9",
    ]);

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 4);

    let mut egg = Series::extract(&records, "Egg", XColumn::Nodes);
    assert_eq!(egg.points, vec![(7.0, 5.0), (9.0, 3.0)]);
    egg.apply(Policy::Smoothed);
    assert_eq!(egg.points, vec![(7.0, 5.0), (9.0, 5.0)]);

    let mut naive = Series::extract(&records, "EgglogNaive", XColumn::Nodes);
    naive.apply(Policy::Smoothed);

    // Egg finishes at 5.0 s, EgglogNaive at 1.0 s.
    let ratio = speedup(&egg, &naive).unwrap();
    assert_eq!(ratio, 5.0);
}

#[test]
fn test_full_pipeline_sorted_variant() {
    let (_dir, path) = write_csv(&[
        "run-000030,Egglog,2000000000,30",
        "run-000010,Egglog,4000000000,10",
        "run-000020,Egglog,1000000000,20",
    ]);

    let records = load_records(&path).unwrap();
    let mut egglog = Series::extract(&records, "Egglog", XColumn::Nodes);
    egglog.apply(Policy::Sorted);

    let xs: Vec<f64> = egglog.points.iter().map(|&(x, _)| x).collect();
    assert_eq!(xs, vec![10.0, 20.0, 30.0]);
    assert_eq!(
        egglog.points,
        vec![(10.0, 4.0), (20.0, 1.0), (30.0, 2.0)]
    );
}

#[test]
fn test_run_id_x_column() {
    // 9-byte prefix: "run-00000" strips off, leaving 42.
    let (_dir, path) = write_csv(&["run-00000042,Egg,2000000000,500"]);

    let records = load_records(&path).unwrap();
    let series = Series::extract(&records, "Egg", XColumn::RunId);
    assert_eq!(series.points, vec![(42.0, 2.0)]);
}

#[test]
fn test_unmatched_engine_yields_empty_series_error() {
    let (_dir, path) = write_csv(&["run-000010,Egg,5000000000,7"]);

    let records = load_records(&path).unwrap();
    let egg = Series::extract(&records, "Egg", XColumn::Nodes);
    let missing = Series::extract(&records, "Souffle", XColumn::Nodes);
    assert!(missing.is_empty());

    let err = speedup(&egg, &missing).unwrap_err();
    assert!(matches!(err, ReportError::EmptySeries(name) if name == "Souffle"));
}

#[test]
fn test_malformed_row_aborts_load() {
    let (_dir, path) = write_csv(&[
        "run-000010,Egg,5000000000,7",
        "run-000020,Egg,not-a-number,9",
    ]);

    let err = load_records(&path).unwrap_err();
    assert!(matches!(
        err,
        LoadError::BadNumber { line: 2, column: "time_ns", .. }
    ));
}

#[test]
fn test_missing_file_is_an_open_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does_not_exist.csv");
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
}
