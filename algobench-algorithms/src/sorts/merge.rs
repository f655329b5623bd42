use crate::SortAlgorithm;
use algobench_core::{Metric, Profiler, Result};

/// Top-down merge sort with a single auxiliary buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn name(&self) -> &'static str {
        "MergeSort"
    }

    fn sort(&self, data: &mut [i32], profiler: &mut Profiler) -> Result<Metric> {
        profiler.profile(|p| merge_sort(data, p))
    }
}

fn merge_sort(data: &mut [i32], profiler: &mut Profiler) -> Result<()> {
    let len = data.len();
    if len < 2 {
        return Ok(());
    }

    let mut aux = data.to_vec();
    profiler.sample_memory()?;

    sort_range(data, &mut aux, 0, len, profiler)
}

fn sort_range(
    data: &mut [i32],
    aux: &mut [i32],
    lo: usize,
    hi: usize,
    profiler: &mut Profiler,
) -> Result<()> {
    if hi - lo < 2 {
        return Ok(());
    }

    let mid = lo + (hi - lo) / 2;
    sort_range(data, aux, lo, mid, profiler)?;
    sort_range(data, aux, mid, hi, profiler)?;
    merge(data, aux, lo, mid, hi, profiler)
}

/// Merge `data[lo..mid]` and `data[mid..hi]`; each placement back into `data` is one write
fn merge(
    data: &mut [i32],
    aux: &mut [i32],
    lo: usize,
    mid: usize,
    hi: usize,
    profiler: &mut Profiler,
) -> Result<()> {
    aux[lo..hi].copy_from_slice(&data[lo..hi]);

    let (mut i, mut j) = (lo, mid);
    for slot in data[lo..hi].iter_mut() {
        if i < mid && (j >= hi || aux[i] <= aux[j]) {
            *slot = aux[i];
            i += 1;
        } else {
            *slot = aux[j];
            j += 1;
        }
        profiler.record_write()?;
    }

    profiler.sample_memory()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::test_support::{check_sorts_correctly, count_writes};

    #[test]
    fn test_sorts() {
        check_sorts_correctly(&MergeSort);
    }

    #[test]
    fn test_write_counts() {
        assert_eq!(count_writes(&MergeSort, &[2, 1]), 2.0);
        // Two merges of 2 plus one merge of 4
        assert_eq!(count_writes(&MergeSort, &[1, 2, 3, 4]), 8.0);
    }

    #[test]
    fn test_stable_on_duplicates() {
        let mut profiler = Profiler::new(algobench_core::ProfilingMode::None);
        let mut data = vec![5, 1, 5, 1, 5];
        MergeSort.sort(&mut data, &mut profiler).unwrap();
        assert_eq!(data, vec![1, 1, 5, 5, 5]);
    }
}
