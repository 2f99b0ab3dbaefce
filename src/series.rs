//! Series extraction and presentation transforms.
//!
//! A [`Series`] is the plottable form of one engine's measurements: the
//! records matching a label, mapped to `(x, seconds)` pairs in record order.
//! The two historical presentation variants (smooth-without-sort and
//! sort-without-smooth) are unified behind [`Policy`].

use crate::loader::Record;
use serde::Deserialize;

const NANOS_PER_SEC: f64 = 1e9;

/// Which record column supplies the x value of a series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XColumn {
    /// The run-id suffix (iteration number)
    RunId,
    /// The swept parameter column (e-node count or similar)
    #[default]
    Nodes,
}

impl XColumn {
    fn value(self, record: &Record) -> f64 {
        match self {
            XColumn::RunId => record.run_id as f64,
            XColumn::Nodes => record.nodes,
        }
    }
}

/// Presentation transform applied to a series before plotting.
///
/// `Smoothed` and `Sorted` are mutually exclusive choices: smoothing
/// suppresses non-monotonic measurement noise while preserving natural run
/// order; sorting produces a clean x-ascending line at the cost of exposing
/// that noise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// No transform; points stay in record order
    Raw,
    /// Cumulative-maximum over y in element order: each y becomes the
    /// maximum of itself and all preceding y values
    #[default]
    Smoothed,
    /// Stable sort ascending by x
    Sorted,
}

/// A named sequence of `(x, y)` points prepared for plotting.
///
/// No uniqueness constraint on x; point order is meaningful (smoothing is
/// position-wise, not x-sorted).
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Name shown in the chart legend
    pub name: String,
    /// The data points, `(x, seconds)`
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Filter `records` to those whose engine label equals `label` exactly,
    /// mapping each to `(x_column value, time_ns / 1e9)` in record order.
    ///
    /// A label with zero matching records yields an empty series.
    pub fn extract(records: &[Record], label: &str, x_column: XColumn) -> Series {
        let points = records
            .iter()
            .filter(|r| r.engine == label)
            .map(|r| (x_column.value(r), r.time_ns / NANOS_PER_SEC))
            .collect();
        Series {
            name: label.to_string(),
            points,
        }
    }

    /// Replace the legend name, keeping the points.
    pub fn with_name(mut self, name: &str) -> Series {
        self.name = name.to_string();
        self
    }

    /// Apply a presentation transform in place.
    pub fn apply(&mut self, policy: Policy) {
        match policy {
            Policy::Raw => {}
            Policy::Smoothed => self.smooth(),
            Policy::Sorted => self.sort_by_x(),
        }
    }

    /// Cumulative-maximum smoothing over y, in existing element order.
    ///
    /// `y[0]` is unchanged; for i >= 1, `y[i] = max(y[i], y[i-1])`, so the
    /// output is non-decreasing in position.
    pub fn smooth(&mut self) {
        for i in 1..self.points.len() {
            let prev = self.points[i - 1].1;
            let y = &mut self.points[i].1;
            *y = y.max(prev);
        }
    }

    /// Stable sort ascending by x. The multiset of points is unchanged.
    pub fn sort_by_x(&mut self) {
        self.points.sort_by(|a, b| a.0.total_cmp(&b.0));
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The y value of the final point, if any.
    pub fn last_y(&self) -> Option<f64> {
        self.points.last().map(|&(_, y)| y)
    }
}
