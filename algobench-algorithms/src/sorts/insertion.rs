use crate::SortAlgorithm;
use algobench_core::{Metric, Profiler, Result};

/// Insertion sort: shifts larger elements right, then inserts the key
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn name(&self) -> &'static str {
        "InsertionSort"
    }

    fn sort(&self, data: &mut [i32], profiler: &mut Profiler) -> Result<Metric> {
        profiler.profile(|p| insertion_sort(data, p))
    }
}

fn insertion_sort(data: &mut [i32], profiler: &mut Profiler) -> Result<()> {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            profiler.record_write()?;
            j -= 1;
        }
        data[j] = key;
        profiler.record_write()?;
    }
    Ok(())
}
