//! Statistical Aggregators
//!
//! Reductions over property series and element fractions. The order statistics
//! return `None` for an empty slice.

use crate::error::FeatureError;

/// Six aggregates of one elemental property over a per-atom series
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropertyStatistics {
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// max - min
    pub range: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Mean absolute deviation from the mean
    pub abs_dev: f64,
    /// Most frequent value
    pub mode: f64,
}

impl PropertyStatistics {
    /// Compute all six aggregates for the series of `property`
    pub fn compute(property: &str, values: &[f64]) -> Result<Self, FeatureError> {
        let empty = || FeatureError::EmptySeries(property.to_string());
        let min = minimum(values).ok_or_else(empty)?;
        let max = maximum(values).ok_or_else(empty)?;
        let mean = mean(values).ok_or_else(empty)?;

        Ok(Self {
            min,
            max,
            range: max - min,
            mean,
            abs_dev: mean_abs_deviation(values).ok_or_else(empty)?,
            mode: mode(values).ok_or_else(empty)?,
        })
    }

    /// Values in output order: min, max, range, mean, abs-dev, mode
    pub fn to_array(&self) -> [f64; 6] {
        [self.min, self.max, self.range, self.mean, self.abs_dev, self.mode]
    }
}

/// Generalised (Hölder) norm of element fractions.
///
/// `p == 0` is not the mathematical limit: it yields the number of distinct
/// elements. Negative `p` is rejected.
pub fn holder_mean(fractions: &[f64], p: i32) -> Result<f64, FeatureError> {
    if p < 0 {
        return Err(FeatureError::NegativeNorm(p));
    }
    if p == 0 {
        return Ok(fractions.len() as f64);
    }

    let sum: f64 = fractions.iter().map(|f| f.powi(p)).sum();
    Ok(sum.powf(1.0 / f64::from(p)))
}

pub fn minimum(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

pub fn maximum(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

pub fn range(values: &[f64]) -> Option<f64> {
    Some(maximum(values)? - minimum(values)?)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Average of `|x - mean|`
pub fn mean_abs_deviation(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let total: f64 = values.iter().map(|v| (v - mean).abs()).sum();
    Some(total / values.len() as f64)
}

/// Most frequent value.
///
/// Ties go to the value whose first occurrence comes earliest in the series.
/// Values are compared bit-for-bit, with `-0.0` counted as `0.0`.
pub fn mode(values: &[f64]) -> Option<f64> {
    // (bits, value, count) in order of first occurrence
    let mut counts: Vec<(u64, f64, usize)> = Vec::new();
    for &v in values {
        let v = if v == 0.0 { 0.0 } else { v };
        let bits = v.to_bits();
        match counts.iter_mut().find(|(b, _, _)| *b == bits) {
            Some((_, _, count)) => *count += 1,
            None => counts.push((bits, v, 1)),
        }
    }

    let mut best: Option<(f64, usize)> = None;
    for (_, value, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}
