//! Result Value Objects

use algobench_core::{BenchError, Metric, ProfilingMode, Result};
use algobench_data::DataShape;
use serde::Serialize;
use std::fmt;

/// Identity of one matrix cell
///
/// Ordered by shape, then input length, then algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RunContext {
    shape: DataShape,
    length: usize,
    algorithm: String,
}

impl RunContext {
    /// Create a context
    pub fn new(shape: DataShape, length: usize, algorithm: impl Into<String>) -> Self {
        Self {
            shape,
            length,
            algorithm: algorithm.into(),
        }
    }

    /// Input shape
    pub fn shape(&self) -> DataShape {
        self.shape
    }

    /// Input length
    pub fn length(&self) -> usize {
        self.length
    }

    /// Algorithm identity
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }
}

impl fmt::Display for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.shape, self.length, self.algorithm)
    }
}

fn check_non_negative(value: f64, what: &str) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(BenchError::invalid_argument(format!(
            "{} must be non-negative, got {}",
            what, value
        )))
    }
}

/// One unreduced measurement tagged with the cell it was produced under
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawResult {
    context: RunContext,
    mode: ProfilingMode,
    value: f64,
}

impl RawResult {
    /// Create a raw result, rejecting negative or NaN values
    pub fn new(context: RunContext, mode: ProfilingMode, value: f64) -> Result<Self> {
        check_non_negative(value, "raw result value")?;
        Ok(Self {
            context,
            mode,
            value,
        })
    }

    /// Tag `metric` with `context`
    pub fn from_metric(context: RunContext, metric: Metric) -> Self {
        Self {
            context,
            mode: metric.mode(),
            value: metric.value(),
        }
    }

    /// Originating cell
    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Profiling mode of the measurement
    pub fn mode(&self) -> ProfilingMode {
        self.mode
    }

    /// Measured value
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Reduction of every raw result sharing one `RunContext`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    context: RunContext,
    mode: ProfilingMode,
    aggregate: f64,
    iteration_count: usize,
}

impl SummaryResult {
    /// Create a summary, rejecting negative or NaN aggregates
    pub fn new(
        context: RunContext,
        mode: ProfilingMode,
        aggregate: f64,
        iteration_count: usize,
    ) -> Result<Self> {
        check_non_negative(aggregate, "aggregate")?;
        Ok(Self {
            context,
            mode,
            aggregate,
            iteration_count,
        })
    }

    /// Summarised cell
    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Profiling mode of the underlying measurements
    pub fn mode(&self) -> ProfilingMode {
        self.mode
    }

    /// Reduced value
    pub fn aggregate(&self) -> f64 {
        self.aggregate
    }

    /// Raw results grouped into this summary, before filtering
    pub fn iteration_count(&self) -> usize {
        self.iteration_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algobench_core::ErrorKind;

    #[test]
    fn test_context_order() {
        let mut contexts = vec![
            RunContext::new(DataShape::Sorted, 10, "QuickSort"),
            RunContext::new(DataShape::Random, 100, "BubbleSort"),
            RunContext::new(DataShape::Random, 10, "QuickSort"),
            RunContext::new(DataShape::Random, 10, "BubbleSort"),
        ];
        contexts.sort();

        assert_eq!(
            contexts,
            vec![
                RunContext::new(DataShape::Random, 10, "BubbleSort"),
                RunContext::new(DataShape::Random, 10, "QuickSort"),
                RunContext::new(DataShape::Random, 100, "BubbleSort"),
                RunContext::new(DataShape::Sorted, 10, "QuickSort"),
            ]
        );
    }

    #[test]
    fn test_context_display() {
        let context = RunContext::new(DataShape::PartiallySorted, 1000, "HeapSort");
        assert_eq!(context.to_string(), "partially-sorted/1000/HeapSort");
    }

    #[test]
    fn test_negative_values_rejected() {
        let context = RunContext::new(DataShape::Sorted, 10, "QuickSort");
        let err = RawResult::new(context.clone(), ProfilingMode::ExecutionTime, -0.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err =
            SummaryResult::new(context, ProfilingMode::ExecutionTime, f64::NAN, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
