//! Execution Context
//!
//! `Sorter` is the single point of input validation and strategy delegation.
//! It owns the `Profiler` handed to whichever algorithm is selected.

use crate::SortAlgorithm;
use algobench_core::{BenchError, Metric, Profiler, ProfilingMode, Result};

/// Runs one sort at a time through the selected algorithm
pub struct Sorter {
    profiler: Profiler,
    algorithm: Option<Box<dyn SortAlgorithm>>,
}

impl Sorter {
    /// Create a context owning `profiler`, with no algorithm selected
    pub fn new(profiler: Profiler) -> Self {
        Self {
            profiler,
            algorithm: None,
        }
    }

    /// Create a context for `mode` with `algorithm` already selected
    pub fn with_algorithm(mode: ProfilingMode, algorithm: Box<dyn SortAlgorithm>) -> Self {
        Self {
            profiler: Profiler::new(mode),
            algorithm: Some(algorithm),
        }
    }

    /// Replace the active algorithm, effective on the next `sort`
    pub fn set_algorithm(&mut self, algorithm: Box<dyn SortAlgorithm>) {
        self.algorithm = Some(algorithm);
    }

    /// Name of the active algorithm, if any
    pub fn algorithm_name(&self) -> Option<&'static str> {
        self.algorithm.as_ref().map(|a| a.name())
    }

    /// The owned profiler
    pub fn profiler(&self) -> &Profiler {
        &self.profiler
    }

    /// Sort `data` in place with the active algorithm
    ///
    /// Empty input is trivially sorted: returns `(None, 0)` without touching
    /// the algorithm or the profiler.
    pub fn sort(&mut self, data: &mut [i32]) -> Result<Metric> {
        let algorithm = self
            .algorithm
            .as_ref()
            .ok_or_else(|| BenchError::invalid_state("no algorithm selected"))?;

        if data.is_empty() {
            return Ok(Metric::none());
        }

        algorithm.sort(data, &mut self.profiler)
    }
}

impl std::fmt::Debug for Sorter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sorter")
            .field("profiler", &self.profiler)
            .field("algorithm", &self.algorithm_name())
            .finish()
    }
}
