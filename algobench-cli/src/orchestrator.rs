//! Run Matrix Orchestration
//!
//! ```text
//! RunConfig ──validate──▶ resolve + instantiate every algorithm
//!                                   │
//!                                   ▼
//!             pre-generate `iterations` datasets per (shape, size)
//!                                   │
//!                                   ▼
//!     algorithm × shape × size × dataset ──deep copy──▶ Sorter ──▶ RawResult
//! ```
//!
//! Every algorithm sees exactly the same datasets, each through its own copy.
//! Execution is strictly sequential and a failure aborts the run: no partial
//! result list is ever returned.

use algobench_algorithms::{AlgorithmRegistry, Sorter, is_sorted};
use algobench_core::{BenchError, ProfilingMode, Result, Timer, pin_to_cpu};
use algobench_data::{DataFactory, DataShape, Dataset};
use algobench_stats::{RawResult, RunContext};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// Matrix to execute
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Algorithm names, matched ignoring case
    pub algorithms: Vec<String>,
    /// Input shapes
    pub shapes: Vec<DataShape>,
    /// Input sizes
    pub sizes: Vec<usize>,
    /// Datasets per (shape, size)
    pub iterations: usize,
    /// Profiling mode for every run
    pub mode: ProfilingMode,
    /// Check that each sorted copy is ascending
    pub verify: bool,
}

impl RunConfig {
    /// Configuration without output verification
    pub fn new(
        algorithms: Vec<String>,
        shapes: Vec<DataShape>,
        sizes: Vec<usize>,
        iterations: usize,
        mode: ProfilingMode,
    ) -> Self {
        Self {
            algorithms,
            shapes,
            sizes,
            iterations,
            mode,
            verify: false,
        }
    }

    /// Enable or disable output verification
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Check shapes, sizes and iterations
    ///
    /// Beyond requiring non-empty shapes and sizes, positive sizes and positive
    /// iterations, repeated shapes or sizes are also rejected: they would make
    /// two matrix cells share one `RunContext` and be aggregated together.
    /// Algorithm names are checked against a registry by the orchestrator.
    pub fn validate(&self) -> Result<()> {
        if self.shapes.is_empty() {
            return Err(BenchError::invalid_argument("no shapes selected"));
        }
        let mut shapes = BTreeSet::new();
        for shape in &self.shapes {
            if !shapes.insert(shape) {
                return Err(BenchError::invalid_argument(format!(
                    "duplicate shape: {}",
                    shape
                )));
            }
        }

        if self.sizes.is_empty() {
            return Err(BenchError::invalid_argument("no sizes selected"));
        }
        let mut sizes = BTreeSet::new();
        for &size in &self.sizes {
            if size == 0 {
                return Err(BenchError::invalid_argument("sizes must be positive"));
            }
            if !sizes.insert(size) {
                return Err(BenchError::invalid_argument(format!(
                    "duplicate size: {}",
                    size
                )));
            }
        }

        if self.iterations == 0 {
            return Err(BenchError::invalid_argument("iterations must be positive"));
        }

        Ok(())
    }

    /// Number of matrix cells (algorithm, shape, size)
    pub fn cell_count(&self) -> usize {
        self.algorithms.len() * self.shapes.len() * self.sizes.len()
    }

    /// Number of raw results a successful run emits
    pub fn run_count(&self) -> usize {
        self.cell_count() * self.iterations
    }
}

/// Executes a `RunConfig` against a registry and a dataset factory
pub struct Orchestrator<F: DataFactory> {
    registry: AlgorithmRegistry,
    factory: F,
    show_progress: bool,
    pin_cpu: Option<usize>,
}

impl<F: DataFactory> Orchestrator<F> {
    /// Orchestrator without progress output or CPU pinning
    pub fn new(registry: AlgorithmRegistry, factory: F) -> Self {
        Self {
            registry,
            factory,
            show_progress: false,
            pin_cpu: None,
        }
    }

    /// Show a progress bar over matrix cells
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Pin the current thread to `cpu` before measuring
    pub fn with_cpu_pin(mut self, cpu: Option<usize>) -> Self {
        self.pin_cpu = cpu;
        self
    }

    /// Execute the whole matrix
    ///
    /// Returns `algorithms × shapes × sizes × iterations` results in emission
    /// order. Invalid configuration or unknown algorithms are
    /// `InvalidArgument`; an algorithm that cannot be constructed, or output
    /// that fails verification, is `InvalidState`.
    pub fn run(&mut self, config: &RunConfig) -> Result<Vec<RawResult>> {
        config.validate()?;

        let names = self.registry.resolve(&config.algorithms)?;
        let algorithms = names
            .iter()
            .map(|name| self.registry.instantiate(name))
            .collect::<Result<Vec<_>>>()?;

        let datasets = self.generate_datasets(config)?;

        if let Some(cpu) = self.pin_cpu {
            match pin_to_cpu(cpu) {
                Ok(()) => debug!(cpu, "pinned to CPU"),
                Err(e) => warn!(cpu, error = %e, "failed to pin to CPU"),
            }
        }

        info!(
            algorithms = algorithms.len(),
            shapes = config.shapes.len(),
            sizes = config.sizes.len(),
            iterations = config.iterations,
            runs = config.run_count(),
            mode = %config.mode,
            "starting run"
        );

        let timer = Timer::start();
        let pb = self.progress_bar(config.cell_count() as u64);
        let mut results = Vec::with_capacity(config.run_count());

        for algorithm in algorithms {
            let name = algorithm.name();
            let mut sorter = Sorter::with_algorithm(config.mode, algorithm);

            for &shape in &config.shapes {
                for &size in &config.sizes {
                    let context = RunContext::new(shape, size, name);
                    pb.set_message(context.to_string());
                    debug!(context = %context, "running cell");

                    let cell = datasets.get(&(shape, size)).ok_or_else(|| {
                        BenchError::invalid_state(format!("no datasets for {}/{}", shape, size))
                    })?;

                    for dataset in cell {
                        let mut data = dataset.values();
                        let metric = sorter.sort(&mut data)?;

                        if config.verify && !is_sorted(&data) {
                            return Err(BenchError::invalid_state(format!(
                                "{} produced unsorted output for {}",
                                name, context
                            )));
                        }

                        results.push(RawResult::from_metric(context.clone(), metric));
                    }

                    pb.inc(1);
                }
            }
        }

        pb.finish_with_message("Complete");
        info!(
            results = results.len(),
            elapsed_ms = timer.elapsed_ms(),
            "run complete"
        );

        Ok(results)
    }

    /// `iterations` datasets for every (shape, size), generated up front
    fn generate_datasets(
        &mut self,
        config: &RunConfig,
    ) -> Result<BTreeMap<(DataShape, usize), Vec<Dataset>>> {
        let mut datasets = BTreeMap::new();

        for &size in &config.sizes {
            for &shape in &config.shapes {
                let mut cell = Vec::with_capacity(config.iterations);
                for _ in 0..config.iterations {
                    let dataset = self.factory.create(shape, size)?;
                    if dataset.len() != size || dataset.shape() != shape {
                        return Err(BenchError::invalid_state(format!(
                            "factory returned {}/{} for requested {}/{}",
                            dataset.shape(),
                            dataset.len(),
                            shape,
                            size
                        )));
                    }
                    cell.push(dataset);
                }
                debug!(shape = %shape, size, count = cell.len(), "generated datasets");
                datasets.insert((shape, size), cell);
            }
        }

        Ok(datasets)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algobench_algorithms::{AlgorithmEntry, SortAlgorithm};
    use algobench_core::{ErrorKind, Metric, Profiler};
    use algobench_data::RandomDataFactory;
    use std::cell::RefCell;

    thread_local! {
        static SEEN: RefCell<Vec<(&'static str, Vec<i32>)>> = const { RefCell::new(Vec::new()) };
    }

    /// Records every input it receives, then sorts it
    struct Recorder(&'static str);

    impl SortAlgorithm for Recorder {
        fn name(&self) -> &'static str {
            self.0
        }

        fn sort(&self, data: &mut [i32], profiler: &mut Profiler) -> Result<Metric> {
            SEEN.with(|seen| seen.borrow_mut().push((self.0, data.to_vec())));
            profiler.profile(|p| {
                data.sort_unstable();
                p.report_operations(data.len() as u64)
            })
        }
    }

    /// Leaves its input untouched
    struct Noop;

    impl SortAlgorithm for Noop {
        fn name(&self) -> &'static str {
            "Noop"
        }

        fn sort(&self, _data: &mut [i32], profiler: &mut Profiler) -> Result<Metric> {
            profiler.profile(|_| Ok(()))
        }
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn orchestrator() -> Orchestrator<RandomDataFactory> {
        Orchestrator::new(AlgorithmRegistry::builtin(), RandomDataFactory::with_seed(42))
    }

    fn config(algorithms: &[&str]) -> RunConfig {
        RunConfig::new(
            names(algorithms),
            vec![DataShape::Random, DataShape::Reversed],
            vec![8, 32],
            3,
            ProfilingMode::DataWriteCount,
        )
    }

    #[test]
    fn test_result_cardinality() {
        let config = config(&["QuickSort", "InsertionSort"]).with_verify(true);
        let results = orchestrator().run(&config).unwrap();

        assert_eq!(results.len(), 2 * 2 * 2 * 3);
        assert_eq!(results.len(), config.run_count());
        assert!(results.iter().all(|r| r.mode() == ProfilingMode::DataWriteCount));

        // Emission order: algorithm, then shape, then size, then iteration
        assert_eq!(results[0].context().algorithm(), "QuickSort");
        assert_eq!(results[0].context().shape(), DataShape::Random);
        assert_eq!(results[0].context().length(), 8);
        assert_eq!(results[3].context().length(), 32);
        assert_eq!(results[6].context().shape(), DataShape::Reversed);
        assert_eq!(results[12].context().algorithm(), "InsertionSort");
    }

    #[test]
    fn test_names_are_canonicalised() {
        let results = orchestrator().run(&config(&["heapsort"])).unwrap();
        assert!(results.iter().all(|r| r.context().algorithm() == "HeapSort"));
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let err = orchestrator().run(&config(&["QuickSort", "BogoSort"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_duplicate_algorithm_rejected() {
        let err = orchestrator().run(&config(&["QuickSort", "quicksort"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_invalid_matrix_rejected() {
        let mut orchestrator = orchestrator();

        let mut zero_iterations = config(&["QuickSort"]);
        zero_iterations.iterations = 0;

        let mut no_sizes = config(&["QuickSort"]);
        no_sizes.sizes.clear();

        let mut zero_size = config(&["QuickSort"]);
        zero_size.sizes = vec![0];

        let mut no_shapes = config(&["QuickSort"]);
        no_shapes.shapes.clear();

        let mut duplicate_shape = config(&["QuickSort"]);
        duplicate_shape.shapes = vec![DataShape::Sorted, DataShape::Sorted];

        let no_algorithms = config(&[]);

        for config in [
            zero_iterations,
            no_sizes,
            zero_size,
            no_shapes,
            duplicate_shape,
            no_algorithms,
        ] {
            let err = orchestrator.run(&config).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{:?}", config);
        }
    }

    #[test]
    fn test_repeated_size_rejected() {
        let mut config = config(&["QuickSort"]);
        config.sizes = vec![10, 10];
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains("duplicate size"));
    }

    #[test]
    fn test_constructor_failure_is_invalid_state() {
        let mut registry = AlgorithmRegistry::builtin();
        registry
            .register(AlgorithmEntry {
                name: "Broken",
                description: "always fails to construct",
                constructor: || Err(BenchError::invalid_argument("no")),
            })
            .unwrap();

        let mut orchestrator = Orchestrator::new(registry, RandomDataFactory::with_seed(1));
        let err = orchestrator
            .run(&config(&["QuickSort", "Broken"]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_every_algorithm_sees_identical_datasets() {
        SEEN.with(|seen| seen.borrow_mut().clear());

        let mut registry = AlgorithmRegistry::new();
        registry
            .register(AlgorithmEntry {
                name: "RecorderA",
                description: "",
                constructor: || Ok(Box::new(Recorder("RecorderA"))),
            })
            .unwrap();
        registry
            .register(AlgorithmEntry {
                name: "RecorderB",
                description: "",
                constructor: || Ok(Box::new(Recorder("RecorderB"))),
            })
            .unwrap();

        let config = RunConfig::new(
            names(&["RecorderA", "RecorderB"]),
            vec![DataShape::Random],
            vec![64],
            4,
            ProfilingMode::DataWriteCount,
        );
        let results = Orchestrator::new(registry, RandomDataFactory::with_seed(9))
            .run(&config)
            .unwrap();
        assert_eq!(results.len(), 8);

        let seen = SEEN.with(|seen| seen.borrow().clone());
        let inputs = |name: &str| -> Vec<Vec<i32>> {
            seen.iter()
                .filter(|(n, _)| *n == name)
                .map(|(_, d)| d.clone())
                .collect()
        };
        let a = inputs("RecorderA");
        let b = inputs("RecorderB");

        assert_eq!(a.len(), 4);
        assert_eq!(a, b);
        // RecorderA sorted its copies; RecorderB still received unsorted input
        assert!(b.iter().any(|d| !is_sorted(d)));
    }

    #[test]
    fn test_verify_catches_unsorted_output() {
        let mut registry = AlgorithmRegistry::new();
        registry
            .register(AlgorithmEntry {
                name: "Noop",
                description: "",
                constructor: || Ok(Box::new(Noop)),
            })
            .unwrap();

        let config = RunConfig::new(
            names(&["Noop"]),
            vec![DataShape::Reversed],
            vec![16],
            1,
            ProfilingMode::ExecutionTime,
        );

        let mut orchestrator = Orchestrator::new(registry, RandomDataFactory::with_seed(3));
        assert_eq!(orchestrator.run(&config).unwrap().len(), 1);

        let err = orchestrator.run(&config.with_verify(true)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_misbehaving_factory_is_invalid_state() {
        struct ShortFactory;

        impl DataFactory for ShortFactory {
            fn create(&mut self, shape: DataShape, _length: usize) -> Result<Dataset> {
                Ok(Dataset::new(shape, &[1, 2]))
            }
        }

        let mut orchestrator = Orchestrator::new(AlgorithmRegistry::builtin(), ShortFactory);
        let err = orchestrator.run(&config(&["QuickSort"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }
}
