//! Timing and Scheduling
//!
//! Monotonic wall-clock timer used by the `ExecutionTime` profiling mode, plus
//! CPU pinning to keep a run on one core.

use std::time::{Duration, Instant};

/// Monotonic timer for one measurement cycle
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time elapsed since the timer started
    #[inline(always)]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed milliseconds, fractional
    #[inline(always)]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_nanos() as f64 / 1_000_000.0
    }
}

/// Set CPU affinity to pin the current thread to a specific core
///
/// Avoids core migrations between measurement cycles.
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu: usize) -> Result<(), std::io::Error> {
    use std::mem::MaybeUninit;

    unsafe {
        let mut set = MaybeUninit::<libc::cpu_set_t>::zeroed();
        let set_ref = set.assume_init_mut();

        libc::CPU_ZERO(set_ref);
        libc::CPU_SET(cpu, set_ref);

        let result = libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set_ref);

        if result == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }
}

/// Set CPU affinity (unsupported on this platform, always succeeds)
#[cfg(not(target_os = "linux"))]
pub fn pin_to_cpu(_cpu: usize) -> Result<(), std::io::Error> {
    Ok(())
}
