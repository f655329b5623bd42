use super::swap;
use crate::SortAlgorithm;
use algobench_core::{Metric, Profiler, Result};

/// In-place binary max-heap sort
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl SortAlgorithm for HeapSort {
    fn name(&self) -> &'static str {
        "HeapSort"
    }

    fn sort(&self, data: &mut [i32], profiler: &mut Profiler) -> Result<Metric> {
        profiler.profile(|p| heap_sort(data, p))
    }
}

fn heap_sort(data: &mut [i32], profiler: &mut Profiler) -> Result<()> {
    let n = data.len();

    for root in (0..n / 2).rev() {
        sift_down(data, root, n, profiler)?;
    }

    for end in (1..n).rev() {
        swap(data, 0, end, profiler)?;
        sift_down(data, 0, end, profiler)?;
    }

    Ok(())
}

fn sift_down(
    data: &mut [i32],
    mut root: usize,
    end: usize,
    profiler: &mut Profiler,
) -> Result<()> {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return Ok(());
        }
        if child + 1 < end && data[child] < data[child + 1] {
            child += 1;
        }
        if data[root] >= data[child] {
            return Ok(());
        }
        swap(data, root, child, profiler)?;
        root = child;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::test_support::{check_sorts_correctly, count_writes};

    #[test]
    fn test_sorts() {
        check_sorts_correctly(&HeapSort);
    }

    #[test]
    fn test_write_counts() {
        assert_eq!(count_writes(&HeapSort, &[2, 1]), 2.0);
        // Heapify swap, then two extract swaps and one sift swap
        assert_eq!(count_writes(&HeapSort, &[1, 2, 3]), 8.0);
    }
}
