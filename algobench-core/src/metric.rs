//! Profiling Modes and Metrics

use crate::error::{BenchError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Which metric dimension a `Profiler` accumulates
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ProfilingMode {
    /// No measurement, always reports zero
    None,
    /// Peak heap growth during the cycle, in bytes
    MemoryUsage,
    /// Number of element writes (swap = 2, shift/insert = 1)
    DataWriteCount,
    /// Elapsed wall-clock time, in milliseconds
    #[default]
    ExecutionTime,
}

impl ProfilingMode {
    /// All modes, in declaration order
    pub const ALL: [ProfilingMode; 4] = [
        ProfilingMode::None,
        ProfilingMode::MemoryUsage,
        ProfilingMode::DataWriteCount,
        ProfilingMode::ExecutionTime,
    ];

    /// Unit label for values measured in this mode
    pub fn unit(self) -> &'static str {
        match self {
            ProfilingMode::None => "",
            ProfilingMode::MemoryUsage => "bytes",
            ProfilingMode::DataWriteCount => "writes",
            ProfilingMode::ExecutionTime => "ms",
        }
    }

    /// Kebab-case identifier, as accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            ProfilingMode::None => "none",
            ProfilingMode::MemoryUsage => "memory-usage",
            ProfilingMode::DataWriteCount => "data-write-count",
            ProfilingMode::ExecutionTime => "execution-time",
        }
    }
}

impl fmt::Display for ProfilingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProfilingMode {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "none" => Ok(ProfilingMode::None),
            "memory-usage" | "memoryusage" | "memory" => Ok(ProfilingMode::MemoryUsage),
            "data-write-count" | "datawritecount" | "writes" => Ok(ProfilingMode::DataWriteCount),
            "execution-time" | "executiontime" | "time" => Ok(ProfilingMode::ExecutionTime),
            other => Err(BenchError::invalid_argument(format!(
                "unknown profiling mode: {}",
                other
            ))),
        }
    }
}

/// Accepts exactly the spellings `FromStr` accepts
impl<'de> Deserialize<'de> for ProfilingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// One measurement produced by a single profiling cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    mode: ProfilingMode,
    value: f64,
}

impl Metric {
    /// Create a metric, rejecting negative or NaN values
    pub fn new(mode: ProfilingMode, value: f64) -> Result<Self> {
        if !(value >= 0.0) {
            return Err(BenchError::invalid_argument(format!(
                "metric value must be non-negative, got {}",
                value
            )));
        }
        Ok(Self { mode, value })
    }

    /// Zero-valued metric for `mode`
    pub const fn zero(mode: ProfilingMode) -> Self {
        Self { mode, value: 0.0 }
    }

    /// The `(None, 0)` metric returned for inputs not worth measuring
    pub const fn none() -> Self {
        Self::zero(ProfilingMode::None)
    }

    /// Mode this metric was measured in
    pub fn mode(&self) -> ProfilingMode {
        self.mode
    }

    /// Measured value
    pub fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_metric_rejects_negative() {
        let err = Metric::new(ProfilingMode::ExecutionTime, -1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = Metric::new(ProfilingMode::ExecutionTime, f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let metric = Metric::new(ProfilingMode::DataWriteCount, 12.0).unwrap();
        assert_eq!(metric.mode(), ProfilingMode::DataWriteCount);
        assert!((metric.value() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_none_metric() {
        let metric = Metric::none();
        assert_eq!(metric.mode(), ProfilingMode::None);
        assert_eq!(metric.value(), 0.0);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("time".parse::<ProfilingMode>().unwrap(), ProfilingMode::ExecutionTime);
        assert_eq!(
            "Memory_Usage".parse::<ProfilingMode>().unwrap(),
            ProfilingMode::MemoryUsage
        );
        assert_eq!(
            "data-write-count".parse::<ProfilingMode>().unwrap(),
            ProfilingMode::DataWriteCount
        );
        assert!("cycles".parse::<ProfilingMode>().is_err());

        for mode in ProfilingMode::ALL {
            assert_eq!(mode.as_str().parse::<ProfilingMode>().unwrap(), mode);
        }
    }
}
