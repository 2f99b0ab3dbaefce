//! Speedup reporting.
//!
//! One derived scalar: the ratio between the final y values of two series.
//! An empty series is a reportable error, not an index panic.

use crate::series::Series;

/// Errors that can occur while computing a speedup
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A series required by the report has no data points
    #[error("no data points for series {0:?}")]
    EmptySeries(String),
}

/// Ratio of the final y value of `numerator` to the final y value of
/// `denominator`.
///
/// With the slower engine as numerator this is the denominator engine's
/// speedup factor.
pub fn speedup(numerator: &Series, denominator: &Series) -> Result<f64, ReportError> {
    let num = numerator
        .last_y()
        .ok_or_else(|| ReportError::EmptySeries(numerator.name.clone()))?;
    let den = denominator
        .last_y()
        .ok_or_else(|| ReportError::EmptySeries(denominator.name.clone()))?;
    Ok(num / den)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, ys: &[f64]) -> Series {
        Series {
            name: name.to_string(),
            points: ys.iter().enumerate().map(|(i, &y)| (i as f64, y)).collect(),
        }
    }

    #[test]
    fn test_speedup_uses_final_values() {
        let egg = series("Egg", &[1.0, 10.0]);
        let naive = series("EgglogNaive", &[7.0, 2.0]);
        assert_eq!(speedup(&egg, &naive).unwrap(), 5.0);
    }

    #[test]
    fn test_empty_numerator() {
        let egg = series("Egg", &[]);
        let naive = series("EgglogNaive", &[2.0]);
        let err = speedup(&egg, &naive).unwrap_err();
        assert!(matches!(err, ReportError::EmptySeries(name) if name == "Egg"));
    }

    #[test]
    fn test_empty_denominator() {
        let egg = series("Egg", &[2.0]);
        let naive = series("EgglogNaive", &[]);
        let err = speedup(&egg, &naive).unwrap_err();
        assert!(matches!(err, ReportError::EmptySeries(name) if name == "EgglogNaive"));
    }
}
