//! Aggregation
//!
//! ```text
//! RawResult* ──group by RunContext──▶ groups (emission order kept)
//!                                        │
//!              fresh filter per group ───┤
//!             fresh reducer per group ───┤
//!                                        ▼
//!                      SummaryResult per context, sorted
//! ```

use crate::filter::{AcceptAll, FilterFactory, ResultFilter};
use crate::reducer::{Reducer, ReducerFactory, ReducerKind};
use crate::{RawResult, RunContext, SummaryResult};
use algobench_core::{BenchError, Result};
use fxhash::FxHashMap;
use tracing::debug;

/// Reduces raw results to one summary per `RunContext`
pub struct Aggregator {
    filter_factory: FilterFactory,
    reducer_factory: ReducerFactory,
}

impl Aggregator {
    /// Aggregator drawing a new filter and reducer from the factories for every group
    pub fn new<F, R>(filter_factory: F, reducer_factory: R) -> Self
    where
        F: Fn() -> Box<dyn ResultFilter> + 'static,
        R: Fn() -> Box<dyn Reducer> + 'static,
    {
        Self {
            filter_factory: Box::new(filter_factory),
            reducer_factory: Box::new(reducer_factory),
        }
    }

    /// Aggregator from already-boxed factories
    pub fn from_factories(filter_factory: FilterFactory, reducer_factory: ReducerFactory) -> Self {
        Self {
            filter_factory,
            reducer_factory,
        }
    }

    /// Description of the filter each group receives
    pub fn filter_description(&self) -> String {
        (self.filter_factory)().describe()
    }

    /// Group, filter and reduce `raw_results`
    ///
    /// Fails with `InvalidArgument` when the input is empty, mixes profiling
    /// modes, or a filter excludes every result of a group. Each summary's
    /// iteration count is the group size before filtering. Output is sorted
    /// by `RunContext`.
    pub fn process(&self, raw_results: &[RawResult]) -> Result<Vec<SummaryResult>> {
        let first = raw_results
            .first()
            .ok_or_else(|| BenchError::invalid_argument("no raw results to aggregate"))?;
        let mode = first.mode();

        if let Some(other) = raw_results.iter().find(|r| r.mode() != mode) {
            return Err(BenchError::invalid_argument(format!(
                "mixed profiling modes in one aggregation: {} and {}",
                mode,
                other.mode()
            )));
        }

        let mut groups: FxHashMap<&RunContext, Vec<&RawResult>> = FxHashMap::default();
        for result in raw_results {
            groups.entry(result.context()).or_default().push(result);
        }

        let mut groups: Vec<_> = groups.into_iter().collect();
        groups.sort_by(|a, b| a.0.cmp(b.0));

        let mut summaries = Vec::with_capacity(groups.len());
        for (context, group) in groups {
            let mut filter = (self.filter_factory)();
            let kept: Vec<f64> = group
                .iter()
                .filter(|r| filter.accept(r))
                .map(|r| r.value())
                .collect();

            if kept.is_empty() {
                return Err(BenchError::invalid_argument(format!(
                    "filter {} excluded every result for {}",
                    filter.describe(),
                    context
                )));
            }

            let mut reducer = (self.reducer_factory)();
            let aggregate = reducer.reduce(&kept)?;

            debug!(
                context = %context,
                raw = group.len(),
                kept = kept.len(),
                aggregate,
                "reduced group"
            );

            summaries.push(SummaryResult::new(
                context.clone(),
                mode,
                aggregate,
                group.len(),
            )?);
        }

        Ok(summaries)
    }
}

impl Default for Aggregator {
    /// Keep everything, reduce by median
    fn default() -> Self {
        Self::from_factories(AcceptAll::factory(), ReducerKind::Median.factory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SkipFirst;
    use crate::reducer::{Mean, Median};
    use algobench_core::{ErrorKind, ProfilingMode};
    use algobench_data::DataShape;

    fn raw(shape: DataShape, length: usize, algorithm: &str, value: f64) -> RawResult {
        RawResult::new(
            RunContext::new(shape, length, algorithm),
            ProfilingMode::ExecutionTime,
            value,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = Aggregator::default().process(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_mixed_modes_rejected() {
        let context = RunContext::new(DataShape::Sorted, 10, "QuickSort");
        let results = vec![
            RawResult::new(context.clone(), ProfilingMode::ExecutionTime, 1.0).unwrap(),
            RawResult::new(context, ProfilingMode::DataWriteCount, 10.0).unwrap(),
        ];
        let err = Aggregator::default().process(&results).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_one_summary_per_context_sorted() {
        let results = vec![
            raw(DataShape::Sorted, 10, "QuickSort", 3.0),
            raw(DataShape::Random, 10, "QuickSort", 1.0),
            raw(DataShape::Sorted, 10, "QuickSort", 5.0),
            raw(DataShape::Random, 10, "BubbleSort", 9.0),
            raw(DataShape::Random, 10, "QuickSort", 2.0),
            raw(DataShape::Sorted, 10, "QuickSort", 4.0),
        ];

        let summaries = Aggregator::default().process(&results).unwrap();
        assert_eq!(summaries.len(), 3);

        assert_eq!(summaries[0].context().algorithm(), "BubbleSort");
        assert_eq!(summaries[0].iteration_count(), 1);
        assert_eq!(summaries[0].aggregate(), 9.0);

        assert_eq!(summaries[1].context().shape(), DataShape::Random);
        assert_eq!(summaries[1].context().algorithm(), "QuickSort");
        assert!((summaries[1].aggregate() - 1.5).abs() < f64::EPSILON);
        assert_eq!(summaries[1].iteration_count(), 2);

        assert_eq!(summaries[2].context().shape(), DataShape::Sorted);
        assert_eq!(summaries[2].aggregate(), 4.0);
        assert_eq!(summaries[2].iteration_count(), 3);
        assert_eq!(summaries[2].mode(), ProfilingMode::ExecutionTime);
    }

    #[test]
    fn test_iteration_count_is_pre_filter() {
        let results: Vec<_> = [10.0, 20.0, 1.0, 2.0, 3.0]
            .iter()
            .map(|&v| raw(DataShape::Sorted, 10, "QuickSort", v))
            .collect();

        let aggregator = Aggregator::new(|| Box::new(SkipFirst::new(2)), || Box::new(Median));
        let summaries = aggregator.process(&results).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].iteration_count(), 5);
        // Median of the last three values only
        assert!((summaries[0].aggregate() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_filter_state_is_fresh_per_group() {
        // Interleaved emission across two contexts
        let mut results = Vec::new();
        for i in 0..4 {
            results.push(raw(DataShape::Random, 10, "HeapSort", 100.0 + i as f64));
            results.push(raw(DataShape::Reversed, 10, "HeapSort", 200.0 + i as f64));
        }

        let aggregator = Aggregator::new(|| Box::new(SkipFirst::new(2)), || Box::new(Mean));
        let summaries = aggregator.process(&results).unwrap();

        assert_eq!(summaries.len(), 2);
        // Each group loses its own first two values: mean of {102, 103} and {202, 203}
        assert!((summaries[0].aggregate() - 102.5).abs() < f64::EPSILON);
        assert!((summaries[1].aggregate() - 202.5).abs() < f64::EPSILON);
        assert!(summaries.iter().all(|s| s.iteration_count() == 4));
    }

    #[test]
    fn test_filter_excluding_group_rejected() {
        let results = vec![
            raw(DataShape::Sorted, 10, "QuickSort", 1.0),
            raw(DataShape::Sorted, 10, "QuickSort", 2.0),
        ];
        let aggregator = Aggregator::from_factories(SkipFirst::factory(2), ReducerKind::Median.factory());
        let err = aggregator.process(&results).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains("skip-first(2)"));
    }

    #[test]
    fn test_filter_description() {
        let aggregator = Aggregator::from_factories(SkipFirst::factory(3), ReducerKind::Mean.factory());
        assert_eq!(aggregator.filter_description(), "skip-first(3)");
        assert_eq!(Aggregator::default().filter_description(), "all");
    }
}
