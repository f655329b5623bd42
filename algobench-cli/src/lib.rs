#![warn(missing_docs)]
//! AlgoBench CLI Library
//!
//! Run matrix orchestration plus the command-line harness around it:
//! configuration discovery, flag layering, aggregation and report output.
//!
//! ```text
//! algobench.toml ─┐
//!                 ├─▶ Settings ─▶ Orchestrator ─▶ Aggregator ─▶ Report ─▶ stdout / file
//! CLI flags ──────┘
//! ```

mod config;
mod orchestrator;

pub use config::*;
pub use orchestrator::{Orchestrator, RunConfig};

use algobench_algorithms::AlgorithmRegistry;
use algobench_core::ProfilingMode;
use algobench_data::{DataShape, RandomDataFactory};
use algobench_report::{OutputFormat, ReportMeta, build_report};
use algobench_stats::{AcceptAll, Aggregator, ReducerKind, SkipFirst};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// AlgoBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "algobench")]
#[command(author, version, about = "AlgoBench - apples-to-apples sorting benchmarks")]
pub struct Cli {
    /// Optional subcommand (Run, List, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Comma-separated algorithm names
    #[arg(long, value_delimiter = ',')]
    pub algorithms: Option<Vec<String>>,

    /// Comma-separated input shapes: random, sorted, reversed, partially-sorted
    #[arg(long, value_delimiter = ',')]
    pub shapes: Option<Vec<DataShape>>,

    /// Comma-separated input sizes
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Datasets per (shape, size)
    #[arg(long, short = 'n')]
    pub iterations: Option<usize>,

    /// Profiling mode: time, writes, memory, none
    #[arg(long)]
    pub mode: Option<ProfilingMode>,

    /// RNG seed for reproducible datasets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Warm-up results discarded from every group
    #[arg(long)]
    pub skip_first: Option<usize>,

    /// Reduction: median, mean, min, max, p<N>
    #[arg(long)]
    pub reducer: Option<ReducerKind>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Check that every sorted copy is ascending
    #[arg(long)]
    pub verify: bool,

    /// Pin to this CPU core before measuring (Linux only)
    #[arg(long)]
    pub pin_cpu: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the benchmark matrix (default)
    Run,
    /// List registered algorithms, shapes and modes
    List,
    /// Print a default algobench.toml
    Init,
}

/// Fully resolved run settings: config file values with CLI overrides
#[derive(Debug, Clone)]
pub struct Settings {
    /// Matrix to execute
    pub run: RunConfig,
    /// Dataset RNG seed
    pub seed: Option<u64>,
    /// CPU core to pin to
    pub pin_cpu: Option<usize>,
    /// Warm-up skip count
    pub skip_first: usize,
    /// Reduction function
    pub reducer: ReducerKind,
    /// Report format
    pub format: OutputFormat,
    /// Report file (stdout when absent)
    pub output: Option<PathBuf>,
    /// Show the progress bar
    pub progress: bool,
}

impl Settings {
    /// Layer `cli` over `config`
    pub fn resolve(cli: &Cli, config: &AlgoBenchConfig) -> anyhow::Result<Self> {
        let reducer = match cli.reducer {
            Some(reducer) => reducer,
            None => config
                .aggregate
                .reducer
                .parse::<ReducerKind>()
                .context("invalid [aggregate] reducer")?,
        };

        let format = match cli.format {
            Some(format) => format,
            None => config
                .output
                .format
                .parse::<OutputFormat>()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("invalid [output] format")?,
        };

        let run = RunConfig::new(
            cli.algorithms
                .clone()
                .unwrap_or_else(|| config.run.algorithms.clone()),
            cli.shapes.clone().unwrap_or_else(|| config.run.shapes.clone()),
            cli.sizes.clone().unwrap_or_else(|| config.run.sizes.clone()),
            cli.iterations.unwrap_or(config.run.iterations),
            cli.mode.unwrap_or(config.run.mode),
        )
        .with_verify(cli.verify || config.run.verify);

        Ok(Self {
            run,
            seed: cli.seed.or(config.run.seed),
            pin_cpu: cli.pin_cpu.or(config.run.pin_cpu),
            skip_first: cli.skip_first.unwrap_or(config.aggregate.skip_first),
            reducer,
            format,
            output: cli.output.clone().or_else(|| config.output.path.clone()),
            progress: !cli.no_progress,
        })
    }

    /// Aggregator matching the skip count and reducer
    pub fn aggregator(&self) -> Aggregator {
        let filter = if self.skip_first == 0 {
            AcceptAll::factory()
        } else {
            SkipFirst::factory(self.skip_first)
        };
        Aggregator::from_factories(filter, self.reducer.factory())
    }
}

/// Run the AlgoBench CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the AlgoBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Logs go to stderr so reports on stdout stay machine-readable
    let filter = if cli.verbose {
        "algobench=debug"
    } else {
        "algobench=info"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        Some(Commands::List) => list_algorithms(),
        Some(Commands::Init) => {
            print!("{}", AlgoBenchConfig::default_toml());
            Ok(())
        }
        Some(Commands::Run) | None => {
            // Discover algobench.toml configuration (CLI flags override)
            let config = AlgoBenchConfig::discover()?.unwrap_or_default();
            let settings = Settings::resolve(&cli, &config)?;
            let report = run_benchmarks(&settings)?;
            write_output(&report, settings.output.as_ref())
        }
    }
}

/// Execute, aggregate and render according to `settings`
pub fn run_benchmarks(settings: &Settings) -> anyhow::Result<String> {
    let factory = match settings.seed {
        Some(seed) => RandomDataFactory::with_seed(seed),
        None => RandomDataFactory::from_entropy(),
    };

    let mut orchestrator = Orchestrator::new(AlgorithmRegistry::builtin(), factory)
        .with_progress(settings.progress)
        .with_cpu_pin(settings.pin_cpu);

    let raw = orchestrator.run(&settings.run)?;

    let aggregator = settings.aggregator();
    let summaries = aggregator.process(&raw)?;
    info!(summaries = summaries.len(), "aggregated results");

    let meta = ReportMeta::new(
        settings.run.mode,
        settings.run.iterations,
        settings.seed,
        aggregator.filter_description(),
        settings.reducer.to_string(),
    );
    let report = build_report(&summaries, meta);

    settings
        .format
        .render(&report)
        .context("failed to render report")
}

fn write_output(output: &str, path: Option<&PathBuf>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn list_algorithms() -> anyhow::Result<()> {
    let registry = AlgorithmRegistry::builtin();

    println!("AlgoBench Algorithms:");
    for entry in registry.entries() {
        println!("├── {:<14} {}", entry.name, entry.description);
    }
    println!("{} algorithms registered.", registry.entries().len());

    let shapes: Vec<&str> = DataShape::ALL.iter().map(|s| s.as_str()).collect();
    println!("Shapes: {}", shapes.join(", "));

    let modes: Vec<&str> = ProfilingMode::ALL.iter().map(|m| m.as_str()).collect();
    println!("Modes: {}", modes.join(", "));

    Ok(())
}
