use super::swap;
use crate::SortAlgorithm;
use algobench_core::{Metric, Profiler, Result};

/// Bubble sort with early exit on a pass without swaps
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn name(&self) -> &'static str {
        "BubbleSort"
    }

    fn sort(&self, data: &mut [i32], profiler: &mut Profiler) -> Result<Metric> {
        profiler.profile(|p| bubble_sort(data, p))
    }
}

fn bubble_sort(data: &mut [i32], profiler: &mut Profiler) -> Result<()> {
    let n = data.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if data[j] > data[j + 1] {
                swap(data, j, j + 1, profiler)?;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(())
}
