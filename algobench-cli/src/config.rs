//! Configuration loading from algobench.toml
//!
//! The configuration is discovered by walking up from the current directory.
//! Every field has a default, so a partial file (or none at all) is valid.
//! Command-line flags are layered on top by the CLI.

use algobench_algorithms::BUILTIN_ALGORITHMS;
use algobench_core::ProfilingMode;
use algobench_data::DataShape;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for by `AlgoBenchConfig::discover`
pub const CONFIG_FILE: &str = "algobench.toml";

/// AlgoBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AlgoBenchConfig {
    /// Run matrix configuration
    #[serde(default)]
    pub run: RunSection,
    /// Aggregation configuration
    #[serde(default)]
    pub aggregate: AggregateSection,
    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Run matrix configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSection {
    /// Algorithm names, matched ignoring case
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<String>,
    /// Input shapes
    #[serde(default = "default_shapes")]
    pub shapes: Vec<DataShape>,
    /// Input sizes
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,
    /// Datasets per (shape, size) cell
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Profiling mode
    #[serde(default)]
    pub mode: ProfilingMode,
    /// Dataset RNG seed (entropy when absent)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Check every sorted copy is ascending
    #[serde(default)]
    pub verify: bool,
    /// Pin the process to this core before measuring
    #[serde(default)]
    pub pin_cpu: Option<usize>,
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            algorithms: default_algorithms(),
            shapes: default_shapes(),
            sizes: default_sizes(),
            iterations: default_iterations(),
            mode: ProfilingMode::default(),
            seed: None,
            verify: false,
            pin_cpu: None,
        }
    }
}

fn default_algorithms() -> Vec<String> {
    BUILTIN_ALGORITHMS
        .iter()
        .map(|e| e.name.to_string())
        .collect()
}
fn default_shapes() -> Vec<DataShape> {
    DataShape::ALL.to_vec()
}
fn default_sizes() -> Vec<usize> {
    vec![100, 1_000, 5_000]
}
fn default_iterations() -> usize {
    10
}

/// Aggregation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateSection {
    /// Warm-up results discarded from the start of every group
    #[serde(default)]
    pub skip_first: usize,
    /// Reduction: "median", "mean", "min", "max" or "p<N>"
    #[serde(default = "default_reducer")]
    pub reducer: String,
}

impl Default for AggregateSection {
    fn default() -> Self {
        Self {
            skip_first: 0,
            reducer: default_reducer(),
        }
    }
}

fn default_reducer() -> String {
    "median".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Output format: "human", "json" or "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Report file (stdout when absent)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl AlgoBenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Find the nearest algobench.toml, walking up from the current directory
    pub fn find_file() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Discover and load configuration
    ///
    /// `Ok(None)` when no file exists. A file that exists but does not parse
    /// is an error rather than silently ignored.
    pub fn discover() -> anyhow::Result<Option<Self>> {
        match Self::find_file() {
            Some(path) => Self::load(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# AlgoBench Configuration

[run]
# Algorithms to benchmark (names are matched ignoring case)
algorithms = ["BubbleSort", "HeapSort", "InsertionSort", "MergeSort", "QuickSort"]
# Input shapes: random, sorted, reversed, partially-sorted
shapes = ["random", "sorted", "reversed", "partially-sorted"]
# Input sizes
sizes = [100, 1000, 5000]
# Datasets generated per (shape, size)
iterations = 10
# Profiling mode: execution-time, data-write-count, memory-usage, none
mode = "execution-time"
# RNG seed for reproducible datasets (uncomment to enable)
# seed = 42
# Check that every sorted copy is ascending
verify = false
# Pin to a CPU core before measuring, Linux only (uncomment to enable)
# pin_cpu = 0

[aggregate]
# Results discarded from the start of every group
skip_first = 0
# Reduction: median, mean, min, max, p<N>
reducer = "median"

[output]
# Output format: human, json, csv
format = "human"
# Report file, stdout if not set (uncomment to enable)
# path = "algobench.json"
"#
        .to_string()
    }
}
