//! Algorithm-Under-Test Contract

use algobench_core::{Metric, Profiler, Result};

/// An interchangeable, instrumented sorting algorithm
///
/// `sort` orders `data` ascending in place and drives `profiler` through
/// exactly one start/stop cycle that brackets the whole sort, reporting
/// every element write through the instrumentation hooks:
/// a swap counts 2 writes, a shift, insert or merge write counts 1.
pub trait SortAlgorithm {
    /// Unique short name, used as the algorithm identity in results (e.g. `"QuickSort"`)
    fn name(&self) -> &'static str;

    /// Sort `data` in place, returning the metric of the bracketing cycle
    fn sort(&self, data: &mut [i32], profiler: &mut Profiler) -> Result<Metric>;
}

/// Whether `data` is in ascending order
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
