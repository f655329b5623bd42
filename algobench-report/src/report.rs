//! Report Data Structures

use algobench_core::ProfilingMode;
use algobench_data::DataShape;
use algobench_stats::SummaryResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version of the JSON report layout
pub const SCHEMA_VERSION: u32 = 1;

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub meta: ReportMeta,
    /// One row per matrix cell, in `RunContext` order
    pub results: Vec<ReportRow>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Layout version, currently `SCHEMA_VERSION`
    pub schema_version: u32,
    /// Tool version
    pub version: String,
    /// Generation time
    pub timestamp: DateTime<Utc>,
    /// Profiling mode shared by every row
    pub mode: ProfilingMode,
    /// Unit of every aggregate
    pub unit: String,
    /// Iterations per matrix cell
    pub iterations: usize,
    /// Dataset RNG seed, when the run was reproducible
    pub seed: Option<u64>,
    /// Filter applied to each group before reduction
    pub filter: String,
    /// Reduction function
    pub reducer: String,
}

impl ReportMeta {
    /// Metadata stamped with the current version and time
    pub fn new(
        mode: ProfilingMode,
        iterations: usize,
        seed: Option<u64>,
        filter: impl Into<String>,
        reducer: impl Into<String>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            mode,
            unit: mode.unit().to_string(),
            iterations,
            seed,
            filter: filter.into(),
            reducer: reducer.into(),
        }
    }
}

/// One aggregated matrix cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    /// Input ordering class
    pub shape: DataShape,
    /// Input size
    pub length: usize,
    /// Algorithm name
    pub algorithm: String,
    /// Reduced value
    pub aggregate: f64,
    /// Raw results in the group before filtering
    pub iterations: usize,
    /// `aggregate` divided by the lowest aggregate among algorithms with the
    /// same shape and size (1.0 = fastest). `None` when that lowest value is 0.
    pub relative: Option<f64>,
}

/// Build a report from aggregator output
pub fn build_report(summaries: &[SummaryResult], meta: ReportMeta) -> Report {
    let mut best: BTreeMap<(DataShape, usize), f64> = BTreeMap::new();
    for summary in summaries {
        let key = (summary.context().shape(), summary.context().length());
        let entry = best.entry(key).or_insert(summary.aggregate());
        *entry = entry.min(summary.aggregate());
    }

    let results = summaries
        .iter()
        .map(|summary| {
            let context = summary.context();
            let lowest = best
                .get(&(context.shape(), context.length()))
                .copied()
                .unwrap_or(0.0);
            let relative = (lowest > 0.0).then(|| summary.aggregate() / lowest);

            ReportRow {
                shape: context.shape(),
                length: context.length(),
                algorithm: context.algorithm().to_string(),
                aggregate: summary.aggregate(),
                iterations: summary.iteration_count(),
                relative,
            }
        })
        .collect();

    Report { meta, results }
}
