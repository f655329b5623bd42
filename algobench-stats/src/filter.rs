//! Result Filters
//!
//! A filter decides, one raw result at a time and in emission order, whether
//! that result takes part in the reduction. Filters may carry state (the
//! warm-up skip counts what it has seen), so the `Aggregator` builds a fresh
//! instance for every group from a `FilterFactory`.

use crate::RawResult;

/// Stateful per-result predicate
pub trait ResultFilter {
    /// Whether `result` is kept
    fn accept(&mut self, result: &RawResult) -> bool;

    /// Short description for report metadata
    fn describe(&self) -> String;
}

/// Builds a fresh filter for each group
pub type FilterFactory = Box<dyn Fn() -> Box<dyn ResultFilter>>;

/// Keeps every result
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl AcceptAll {
    /// Factory producing `AcceptAll` filters
    pub fn factory() -> FilterFactory {
        Box::new(|| Box::new(AcceptAll))
    }
}

impl ResultFilter for AcceptAll {
    fn accept(&mut self, _result: &RawResult) -> bool {
        true
    }

    fn describe(&self) -> String {
        "all".to_string()
    }
}

/// Warm-up skip: drops the first `n` results it sees
#[derive(Debug, Clone)]
pub struct SkipFirst {
    skip: usize,
    seen: usize,
}

impl SkipFirst {
    /// Filter dropping the first `skip` results
    pub fn new(skip: usize) -> Self {
        Self { skip, seen: 0 }
    }

    /// Factory producing independent `SkipFirst(skip)` filters
    pub fn factory(skip: usize) -> FilterFactory {
        Box::new(move || Box::new(SkipFirst::new(skip)))
    }
}

impl ResultFilter for SkipFirst {
    fn accept(&mut self, _result: &RawResult) -> bool {
        self.seen += 1;
        self.seen > self.skip
    }

    fn describe(&self) -> String {
        format!("skip-first({})", self.skip)
    }
}

/// Keeps a result only when every inner filter keeps it
///
/// Every inner filter observes every result, so stateful filters advance
/// regardless of the others' decisions.
pub struct Chain {
    filters: Vec<Box<dyn ResultFilter>>,
}

impl Chain {
    /// Combine `filters`
    pub fn new(filters: Vec<Box<dyn ResultFilter>>) -> Self {
        Self { filters }
    }
}

impl ResultFilter for Chain {
    fn accept(&mut self, result: &RawResult) -> bool {
        self.filters
            .iter_mut()
            .fold(true, |keep, filter| filter.accept(result) && keep)
    }

    fn describe(&self) -> String {
        if self.filters.is_empty() {
            return AcceptAll.describe();
        }
        self.filters
            .iter()
            .map(|f| f.describe())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
