#![warn(missing_docs)]
//! AlgoBench Algorithms - The Algorithms Under Test
//!
//! - `SortAlgorithm` capability trait every algorithm implements
//! - Instrumented textbook sorts (bubble, insertion, merge, quick, heap)
//! - `AlgorithmRegistry` mapping stable names to constructors
//! - `Sorter` execution context: input validation and strategy delegation

mod algorithm;
mod registry;
mod sorter;
mod sorts;

pub use algorithm::{SortAlgorithm, is_sorted};
pub use registry::{AlgorithmConstructor, AlgorithmEntry, AlgorithmRegistry, BUILTIN_ALGORITHMS};
pub use sorter::Sorter;
pub use sorts::{BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort};
