//! Reduction Functions
//!
//! A reducer turns the filtered values of one group into its aggregate.
//! The median is the default: one scheduler hiccup or allocator stall in a
//! group does not move it.

use crate::percentiles::{compute_median, compute_percentile};
use algobench_core::{BenchError, Result};
use std::fmt;

/// Reduces a non-empty set of values to one aggregate
pub trait Reducer {
    /// Reduce `values`; fails with `InvalidArgument` when empty
    fn reduce(&mut self, values: &[f64]) -> Result<f64>;
}

/// Builds a fresh reducer for each group
pub type ReducerFactory = Box<dyn Fn() -> Box<dyn Reducer>>;

fn require_values(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        Err(BenchError::invalid_argument("cannot reduce an empty set of values"))
    } else {
        Ok(())
    }
}

/// Median of the values
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl Reducer for Median {
    fn reduce(&mut self, values: &[f64]) -> Result<f64> {
        require_values(values)?;
        Ok(compute_median(values))
    }
}

/// Arithmetic mean
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl Reducer for Mean {
    fn reduce(&mut self, values: &[f64]) -> Result<f64> {
        require_values(values)?;
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Smallest value
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

impl Reducer for Min {
    fn reduce(&mut self, values: &[f64]) -> Result<f64> {
        require_values(values)?;
        Ok(values.iter().copied().fold(f64::INFINITY, f64::min))
    }
}

/// Largest value
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl Reducer for Max {
    fn reduce(&mut self, values: &[f64]) -> Result<f64> {
        require_values(values)?;
        Ok(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }
}

/// Linear-interpolated percentile (0–100)
#[derive(Debug, Clone, Copy)]
pub struct Percentile(pub f64);

impl Reducer for Percentile {
    fn reduce(&mut self, values: &[f64]) -> Result<f64> {
        require_values(values)?;
        Ok(compute_percentile(values, self.0))
    }
}

/// Named reducer selection, as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ReducerKind {
    /// [`Median`]
    #[default]
    Median,
    /// [`Mean`]
    Mean,
    /// [`Min`]
    Min,
    /// [`Max`]
    Max,
    /// [`Percentile`]
    Percentile(f64),
}

impl ReducerKind {
    /// Factory producing reducers of this kind
    pub fn factory(self) -> ReducerFactory {
        match self {
            ReducerKind::Median => Box::new(|| Box::new(Median)),
            ReducerKind::Mean => Box::new(|| Box::new(Mean)),
            ReducerKind::Min => Box::new(|| Box::new(Min)),
            ReducerKind::Max => Box::new(|| Box::new(Max)),
            ReducerKind::Percentile(p) => Box::new(move || Box::new(Percentile(p))),
        }
    }
}

impl fmt::Display for ReducerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReducerKind::Median => f.write_str("median"),
            ReducerKind::Mean => f.write_str("mean"),
            ReducerKind::Min => f.write_str("min"),
            ReducerKind::Max => f.write_str("max"),
            ReducerKind::Percentile(p) => write!(f, "p{}", p),
        }
    }
}

impl std::str::FromStr for ReducerKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "median" => Ok(ReducerKind::Median),
            "mean" | "avg" | "average" => Ok(ReducerKind::Mean),
            "min" => Ok(ReducerKind::Min),
            "max" => Ok(ReducerKind::Max),
            other => {
                let p: f64 = other
                    .strip_prefix('p')
                    .and_then(|n| n.parse().ok())
                    .ok_or_else(|| {
                        BenchError::invalid_argument(format!("unknown reducer: {}", other))
                    })?;
                if !(0.0..=100.0).contains(&p) {
                    return Err(BenchError::invalid_argument(format!(
                        "percentile out of range: {}",
                        p
                    )));
                }
                Ok(ReducerKind::Percentile(p))
            }
        }
    }
}
