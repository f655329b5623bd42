#![warn(missing_docs)]
//! AlgoBench Core - Measurement Runtime
//!
//! This crate provides the measurement primitives shared by every stage of a run:
//! - `Profiler` state machine yielding exactly one `Metric` per cycle
//! - `ProfilingMode` / `Metric` value types
//! - Monotonic `Timer` for elapsed-time measurement
//! - Global allocator interceptor for heap-in-use accounting
//! - CPU affinity pinning for steadier timings
//! - The two contract-violation error kinds used across the workspace

mod allocator;
mod error;
mod measure;
mod metric;
mod profiler;

pub use allocator::{TrackingAllocator, heap_in_use};
pub use error::{BenchError, ErrorKind, Result};
pub use measure::{Timer, pin_to_cpu};
pub use metric::{Metric, ProfilingMode};
pub use profiler::{Profiler, ProfilerState};

#[cfg(test)]
#[global_allocator]
static TEST_ALLOCATOR: TrackingAllocator = TrackingAllocator;
