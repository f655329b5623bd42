#![warn(missing_docs)]
//! AlgoBench Statistical Engine
//!
//! Turns the raw per-iteration results of a run into one summary per matrix
//! cell:
//! - `RunContext` / `RawResult` / `SummaryResult` value types
//! - Stateful result filters (warm-up skip) built fresh per group
//! - Reduction functions (median by default, mean, min, max, percentile)
//! - `Aggregator`: grouping, filtering, reduction, deterministic ordering

mod aggregate;
mod filter;
mod percentiles;
mod reducer;
mod result;

pub use aggregate::Aggregator;
pub use filter::{AcceptAll, Chain, FilterFactory, ResultFilter, SkipFirst};
pub use percentiles::{compute_median, compute_percentile};
pub use reducer::{Max, Mean, Median, Min, Percentile, Reducer, ReducerFactory, ReducerKind};
pub use result::{RawResult, RunContext, SummaryResult};
