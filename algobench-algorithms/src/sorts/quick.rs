use super::swap;
use crate::SortAlgorithm;
use algobench_core::{Metric, Profiler, Result};

/// Quicksort with Lomuto partitioning around the last element
///
/// Recurses into the smaller partition only, so stack depth stays logarithmic
/// even on the quadratic (already sorted) inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn name(&self) -> &'static str {
        "QuickSort"
    }

    fn sort(&self, data: &mut [i32], profiler: &mut Profiler) -> Result<Metric> {
        let len = data.len();
        profiler.profile(|p| quick_sort(data, 0, len, p))
    }
}

fn quick_sort(
    data: &mut [i32],
    mut lo: usize,
    mut hi: usize,
    profiler: &mut Profiler,
) -> Result<()> {
    while hi - lo > 1 {
        let pivot = partition(data, lo, hi, profiler)?;
        if pivot - lo < hi - pivot {
            quick_sort(data, lo, pivot, profiler)?;
            lo = pivot + 1;
        } else {
            quick_sort(data, pivot + 1, hi, profiler)?;
            hi = pivot;
        }
    }
    Ok(())
}

fn partition(data: &mut [i32], lo: usize, hi: usize, profiler: &mut Profiler) -> Result<usize> {
    let last = hi - 1;
    let pivot = data[last];
    let mut store = lo;

    for j in lo..last {
        if data[j] < pivot {
            swap(data, store, j, profiler)?;
            store += 1;
        }
    }
    swap(data, store, last, profiler)?;

    Ok(store)
}
