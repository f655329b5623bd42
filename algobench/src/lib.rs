#![warn(missing_docs)]
//! # AlgoBench
//!
//! Repeatable, apples-to-apples benchmarking of interchangeable sorting
//! algorithms.
//!
//! - **Profiler**: one start/stop cycle per run, measuring time, element
//!   writes or peak heap growth
//! - **Fair inputs**: every algorithm sorts its own copy of the same
//!   pre-generated datasets
//! - **Aggregation**: warm-up skip filters and reducers built fresh per
//!   matrix cell, median by default
//! - **Reports**: JSON, CSV and human tables
//!
//! ## Quick Start
//!
//! ```ignore
//! use algobench::prelude::*;
//!
//! let config = RunConfig::new(
//!     vec!["QuickSort".into(), "MergeSort".into()],
//!     vec![DataShape::Random, DataShape::Sorted],
//!     vec![1_000, 10_000],
//!     10,
//!     ProfilingMode::ExecutionTime,
//! );
//! let raw = Orchestrator::new(AlgorithmRegistry::builtin(), RandomDataFactory::with_seed(42))
//!     .run(&config)?;
//! let summaries = Aggregator::default().process(&raw)?;
//! ```

// Re-export core types
pub use algobench_core::{
    BenchError, ErrorKind, Metric, Profiler, ProfilerState, ProfilingMode, Result, Timer,
    TrackingAllocator, heap_in_use, pin_to_cpu,
};

// Re-export algorithms
pub use algobench_algorithms::{
    AlgorithmConstructor, AlgorithmEntry, AlgorithmRegistry, BUILTIN_ALGORITHMS, BubbleSort,
    HeapSort, InsertionSort, MergeSort, QuickSort, SortAlgorithm, Sorter, is_sorted,
};

// Re-export data generation
pub use algobench_data::{DataFactory, DataShape, Dataset, RandomDataFactory};

// Re-export stats
pub use algobench_stats::{
    AcceptAll, Aggregator, Chain, FilterFactory, Max, Mean, Median, Min, Percentile, RawResult,
    Reducer, ReducerFactory, ReducerKind, ResultFilter, RunContext, SkipFirst, SummaryResult,
    compute_median, compute_percentile,
};

// Re-export reporting
pub use algobench_report::{
    OutputFormat, Report, ReportMeta, ReportRow, build_report, format_human_output,
    generate_csv_report, generate_json_report,
};

// Re-export orchestration
pub use algobench_cli::{AlgoBenchConfig, Orchestrator, RunConfig};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Aggregator, AlgorithmRegistry, BenchError, DataShape, ErrorKind, Orchestrator,
        ProfilingMode, RandomDataFactory, ReducerKind, RunConfig, SkipFirst, SortAlgorithm,
        Sorter,
    };
}

/// Run the AlgoBench CLI harness.
pub use algobench_cli::run;
