//! Algorithm Registry
//!
//! Static name → constructor table. Unknown names are rejected explicitly;
//! identities are unique ignoring ASCII case.

use crate::SortAlgorithm;
use crate::sorts::{BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort};
use algobench_core::{BenchError, Result};
use fxhash::FxHashSet;

/// Constructor producing a fresh algorithm instance
pub type AlgorithmConstructor = fn() -> Result<Box<dyn SortAlgorithm>>;

/// One registered algorithm
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmEntry {
    /// Stable identity, equal to the constructed instance's `name()`
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Constructor
    pub constructor: AlgorithmConstructor,
}

/// Algorithms shipped with AlgoBench
pub static BUILTIN_ALGORITHMS: &[AlgorithmEntry] = &[
    AlgorithmEntry {
        name: "BubbleSort",
        description: "Adjacent swaps with early exit, O(n^2)",
        constructor: || Ok(Box::new(BubbleSort)),
    },
    AlgorithmEntry {
        name: "HeapSort",
        description: "In-place binary max-heap, O(n log n)",
        constructor: || Ok(Box::new(HeapSort)),
    },
    AlgorithmEntry {
        name: "InsertionSort",
        description: "Shift-and-insert, O(n^2), linear on sorted input",
        constructor: || Ok(Box::new(InsertionSort)),
    },
    AlgorithmEntry {
        name: "MergeSort",
        description: "Top-down merge with one auxiliary buffer, O(n log n)",
        constructor: || Ok(Box::new(MergeSort)),
    },
    AlgorithmEntry {
        name: "QuickSort",
        description: "Lomuto partition on the last element, O(n log n) average",
        constructor: || Ok(Box::new(QuickSort)),
    },
];

/// Registry of constructible algorithms
#[derive(Debug, Clone, Default)]
pub struct AlgorithmRegistry {
    entries: Vec<AlgorithmEntry>,
}

impl AlgorithmRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in algorithm
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ALGORITHMS.to_vec(),
        }
    }

    /// Register an algorithm, rejecting case-insensitive duplicates
    pub fn register(&mut self, entry: AlgorithmEntry) -> Result<()> {
        if self.find(entry.name).is_some() {
            return Err(BenchError::invalid_argument(format!(
                "algorithm already registered: {}",
                entry.name
            )));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Look up an entry by name, ignoring ASCII case
    pub fn find(&self, name: &str) -> Option<&AlgorithmEntry> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// All registered entries, in registration order
    pub fn entries(&self) -> &[AlgorithmEntry] {
        &self.entries
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Construct the algorithm registered as `name`
    ///
    /// Unknown names are `InvalidArgument`. A constructor that fails, or
    /// produces an instance reporting a different name, is a misconfigured
    /// factory and surfaces as `InvalidState`.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn SortAlgorithm>> {
        let entry = self
            .find(name)
            .ok_or_else(|| BenchError::invalid_argument(format!("unknown algorithm: {}", name)))?;

        let algorithm = (entry.constructor)().map_err(|e| {
            BenchError::invalid_state(format!(
                "failed to instantiate {}: {}",
                entry.name,
                e.message()
            ))
        })?;

        if algorithm.name() != entry.name {
            return Err(BenchError::invalid_state(format!(
                "algorithm registered as {} reports name {}",
                entry.name,
                algorithm.name()
            )));
        }

        Ok(algorithm)
    }

    /// Resolve `names` to canonical identities
    ///
    /// Fails with `InvalidArgument` on an empty list, an empty or unknown
    /// name, or names that repeat ignoring case.
    pub fn resolve(&self, names: &[String]) -> Result<Vec<&'static str>> {
        if names.is_empty() {
            return Err(BenchError::invalid_argument("no algorithms selected"));
        }

        let mut seen = FxHashSet::default();
        let mut resolved = Vec::with_capacity(names.len());

        for name in names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(BenchError::invalid_argument("empty algorithm name"));
            }
            if !seen.insert(trimmed.to_ascii_lowercase()) {
                return Err(BenchError::invalid_argument(format!(
                    "duplicate algorithm: {}",
                    trimmed
                )));
            }
            let entry = self.find(trimmed).ok_or_else(|| {
                BenchError::invalid_argument(format!("unknown algorithm: {}", trimmed))
            })?;
            resolved.push(entry.name);
        }

        Ok(resolved)
    }
}
