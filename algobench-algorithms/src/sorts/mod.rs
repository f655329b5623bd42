//! Instrumented Sorts
//!
//! Textbook implementations. Write counts follow the operation definitions
//! exactly so `DataWriteCount` results compare across algorithms.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;

use algobench_core::{Profiler, Result};

/// Swap two elements, recording 2 writes
#[inline]
fn swap(data: &mut [i32], i: usize, j: usize, profiler: &mut Profiler) -> Result<()> {
    data.swap(i, j);
    profiler.record_swap()
}
