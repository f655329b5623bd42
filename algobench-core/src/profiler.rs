//! Profiler - The Measurement State Machine
//!
//! A `Profiler` runs one measurement cycle at a time:
//!
//! ```text
//!   Idle ──start()──▶ Profiling ──stop()──▶ Idle
//! ```
//!
//! While profiling, algorithms feed it through the instrumentation hooks
//! (`report_operations`, `sample_memory`). Only the accumulator for the
//! configured `ProfilingMode` is updated; `metric()` yields the value of the
//! last completed cycle.

use crate::allocator::heap_in_use;
use crate::error::{BenchError, Result};
use crate::measure::Timer;
use crate::metric::{Metric, ProfilingMode};

/// Lifecycle state of a `Profiler`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilerState {
    /// No cycle in progress
    Idle,
    /// Between `start()` and `stop()`
    Profiling,
}

/// Single-owner measurement state machine
///
/// Never share a `Profiler` between concurrently running algorithms; each
/// execution context owns its own.
#[derive(Debug, Clone)]
pub struct Profiler {
    mode: ProfilingMode,
    state: ProfilerState,

    // === Current cycle ===
    timer: Option<Timer>,
    initial_heap: usize,
    peak_heap: usize,
    operations: u64,

    // === Last completed cycle ===
    elapsed_ms: f64,
    memory_delta: usize,
    completed_cycles: u64,
}

impl Profiler {
    /// Create an idle profiler for `mode`
    pub fn new(mode: ProfilingMode) -> Self {
        Self {
            mode,
            state: ProfilerState::Idle,
            timer: None,
            initial_heap: 0,
            peak_heap: 0,
            operations: 0,
            elapsed_ms: 0.0,
            memory_delta: 0,
            completed_cycles: 0,
        }
    }

    /// Configured profiling mode
    pub fn mode(&self) -> ProfilingMode {
        self.mode
    }

    /// Current lifecycle state
    pub fn state(&self) -> ProfilerState {
        self.state
    }

    /// Whether a cycle is in progress
    pub fn is_profiling(&self) -> bool {
        self.state == ProfilerState::Profiling
    }

    /// Number of cycles completed since creation or the last `reset()`
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    /// Begin a measurement cycle
    pub fn start(&mut self) -> Result<()> {
        if self.is_profiling() {
            return Err(BenchError::invalid_state("profiler is already profiling"));
        }

        self.state = ProfilerState::Profiling;
        self.operations = 0;

        match self.mode {
            ProfilingMode::MemoryUsage => {
                self.initial_heap = heap_in_use();
                self.peak_heap = self.initial_heap;
            }
            ProfilingMode::ExecutionTime => {
                // Last, so setup above is not timed
                self.timer = Some(Timer::start());
            }
            ProfilingMode::None | ProfilingMode::DataWriteCount => {}
        }

        Ok(())
    }

    /// End the current measurement cycle
    pub fn stop(&mut self) -> Result<()> {
        // Read the clock before anything else
        let elapsed_ms = self.timer.take().map(|t| t.elapsed_ms());

        if !self.is_profiling() {
            return Err(BenchError::invalid_state("profiler is not profiling"));
        }

        match self.mode {
            ProfilingMode::ExecutionTime => {
                self.elapsed_ms = elapsed_ms.unwrap_or(0.0);
            }
            ProfilingMode::MemoryUsage => {
                self.peak_heap = self.peak_heap.max(heap_in_use());
                self.memory_delta = self.peak_heap.saturating_sub(self.initial_heap);
            }
            ProfilingMode::None | ProfilingMode::DataWriteCount => {}
        }

        self.state = ProfilerState::Idle;
        self.completed_cycles += 1;
        Ok(())
    }

    /// Record a heap checkpoint (no-op unless `MemoryUsage`)
    #[inline]
    pub fn sample_memory(&mut self) -> Result<()> {
        if !self.is_profiling() {
            return Err(BenchError::invalid_state(
                "memory sampled while profiler is not profiling",
            ));
        }
        if self.mode == ProfilingMode::MemoryUsage {
            self.peak_heap = self.peak_heap.max(heap_in_use());
        }
        Ok(())
    }

    /// Add `count` element writes (no-op unless `DataWriteCount`)
    ///
    /// The count is unsigned, so negative operation counts cannot be expressed.
    /// A total beyond `u64::MAX` is `InvalidArgument`.
    #[inline]
    pub fn report_operations(&mut self, count: u64) -> Result<()> {
        if !self.is_profiling() {
            return Err(BenchError::invalid_state(
                "operations reported while profiler is not profiling",
            ));
        }
        if self.mode == ProfilingMode::DataWriteCount {
            self.operations = self
                .operations
                .checked_add(count)
                .ok_or_else(|| BenchError::invalid_argument("operation count overflow"))?;
        }
        Ok(())
    }

    /// Record one swap (2 writes)
    #[inline]
    pub fn record_swap(&mut self) -> Result<()> {
        self.report_operations(2)
    }

    /// Record one shift, insert or buffer write (1 write)
    #[inline]
    pub fn record_write(&mut self) -> Result<()> {
        self.report_operations(1)
    }

    /// Clear every accumulator and the last completed measurement
    pub fn reset(&mut self) -> Result<()> {
        if self.is_profiling() {
            return Err(BenchError::invalid_state(
                "cannot reset while profiler is profiling",
            ));
        }

        self.timer = None;
        self.initial_heap = 0;
        self.peak_heap = 0;
        self.operations = 0;
        self.elapsed_ms = 0.0;
        self.memory_delta = 0;
        self.completed_cycles = 0;
        Ok(())
    }

    /// Metric of the last completed cycle (zero before the first one)
    pub fn metric(&self) -> Result<Metric> {
        if self.is_profiling() {
            return Err(BenchError::invalid_state(
                "metric requested while profiler is profiling",
            ));
        }

        let value = match self.mode {
            ProfilingMode::None => 0.0,
            ProfilingMode::ExecutionTime => self.elapsed_ms,
            ProfilingMode::MemoryUsage => self.memory_delta as f64,
            ProfilingMode::DataWriteCount => self.operations as f64,
        };

        Metric::new(self.mode, value)
    }

    /// Run `work` inside exactly one start/stop cycle and return its metric
    ///
    /// The cycle is stopped even when `work` fails, leaving the profiler idle.
    pub fn profile<F>(&mut self, work: F) -> Result<Metric>
    where
        F: FnOnce(&mut Profiler) -> Result<()>,
    {
        self.start()?;
        let outcome = work(self);
        self.stop()?;
        outcome?;
        self.metric()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::time::Duration;

    #[test]
    fn test_double_start_fails() {
        let mut profiler = Profiler::new(ProfilingMode::ExecutionTime);
        profiler.start().unwrap();

        let err = profiler.start().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        // The original cycle is still running
        assert!(profiler.is_profiling());
    }

    #[test]
    fn test_stop_without_start_fails() {
        let mut profiler = Profiler::new(ProfilingMode::ExecutionTime);
        let err = profiler.stop().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(profiler.state(), ProfilerState::Idle);
    }

    #[test]
    fn test_reset_while_profiling_fails() {
        let mut profiler = Profiler::new(ProfilingMode::DataWriteCount);
        profiler.start().unwrap();
        let err = profiler.reset().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_metric_while_profiling_fails() {
        let mut profiler = Profiler::new(ProfilingMode::DataWriteCount);
        profiler.start().unwrap();
        assert_eq!(profiler.metric().unwrap_err().kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_hooks_require_profiling() {
        let mut profiler = Profiler::new(ProfilingMode::DataWriteCount);
        assert_eq!(
            profiler.report_operations(1).unwrap_err().kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(
            profiler.sample_memory().unwrap_err().kind(),
            ErrorKind::InvalidState
        );
    }

    #[test]
    fn test_metric_before_first_cycle_is_zero() {
        for mode in ProfilingMode::ALL {
            let profiler = Profiler::new(mode);
            let metric = profiler.metric().unwrap();
            assert_eq!(metric.mode(), mode);
            assert_eq!(metric.value(), 0.0);
        }
    }

    #[test]
    fn test_write_counting() {
        let mut profiler = Profiler::new(ProfilingMode::DataWriteCount);
        let metric = profiler
            .profile(|p| {
                p.record_swap()?;
                p.record_swap()?;
                p.record_write()?;
                p.report_operations(4)
            })
            .unwrap();

        assert_eq!(metric.mode(), ProfilingMode::DataWriteCount);
        assert!((metric.value() - 9.0).abs() < f64::EPSILON);
        assert_eq!(profiler.completed_cycles(), 1);
    }

    #[test]
    fn test_operation_count_overflow_rejected() {
        let mut profiler = Profiler::new(ProfilingMode::DataWriteCount);
        profiler.start().unwrap();
        profiler.report_operations(u64::MAX).unwrap();

        let err = profiler.report_operations(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        // The cycle is still running and can be stopped normally
        profiler.stop().unwrap();
        assert!((profiler.metric().unwrap().value() - u64::MAX as f64).abs() < 1.0);
    }

    #[test]
    fn test_counts_do_not_leak_between_cycles() {
        let mut profiler = Profiler::new(ProfilingMode::DataWriteCount);
        profiler.profile(|p| p.report_operations(10)).unwrap();
        let metric = profiler.profile(|p| p.report_operations(3)).unwrap();
        assert!((metric.value() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_other_modes_ignore_operations() {
        let mut profiler = Profiler::new(ProfilingMode::None);
        let metric = profiler.profile(|p| p.report_operations(100)).unwrap();
        assert_eq!(metric.mode(), ProfilingMode::None);
        assert_eq!(metric.value(), 0.0);
    }

    #[test]
    fn test_reset_clears_metric() {
        let mut profiler = Profiler::new(ProfilingMode::DataWriteCount);
        profiler.profile(|p| p.report_operations(7)).unwrap();
        assert!(profiler.metric().unwrap().value() > 0.0);

        profiler.reset().unwrap();
        let metric = profiler.metric().unwrap();
        assert_eq!(metric.value(), 0.0);
        assert_eq!(metric.mode(), ProfilingMode::DataWriteCount);
        assert_eq!(profiler.completed_cycles(), 0);
    }

    #[test]
    fn test_execution_time() {
        let mut profiler = Profiler::new(ProfilingMode::ExecutionTime);
        let metric = profiler
            .profile(|_| {
                std::thread::sleep(Duration::from_millis(10));
                Ok(())
            })
            .unwrap();

        assert_eq!(metric.mode(), ProfilingMode::ExecutionTime);
        assert!(metric.value() >= 5.0);
        assert!(metric.value() < 1_000.0);
    }

    #[test]
    fn test_memory_usage_sees_live_growth() {
        let mut profiler = Profiler::new(ProfilingMode::MemoryUsage);
        let mut keep = Vec::new();
        let metric = profiler
            .profile(|p| {
                keep.push(vec![1u8; 32 * 1024 * 1024]);
                p.sample_memory()
            })
            .unwrap();

        assert_eq!(metric.mode(), ProfilingMode::MemoryUsage);
        assert!(metric.value() > 0.0);
        drop(keep);
    }

    #[test]
    fn test_memory_usage_is_never_negative() {
        let mut profiler = Profiler::new(ProfilingMode::MemoryUsage);
        let big = vec![0u8; 1024 * 1024];
        let metric = profiler
            .profile(|p| {
                drop(big);
                p.sample_memory()
            })
            .unwrap();
        assert!(metric.value() >= 0.0);
    }

    #[test]
    fn test_profile_stops_on_failure() {
        let mut profiler = Profiler::new(ProfilingMode::DataWriteCount);
        let err = profiler
            .profile(|p| {
                p.record_write()?;
                Err(BenchError::invalid_state("algorithm failed"))
            })
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(profiler.state(), ProfilerState::Idle);
        // A fresh cycle can start afterwards
        profiler.start().unwrap();
    }
}
