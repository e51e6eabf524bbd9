//! # Introduction
//!
//! Classic sorting algorithms behind a single registry, with step-by-step tracing for
//! visualization. Based on [Crust of Rust: Sorting
//! Algorithms](https://www.youtube.com/watch?v=h4RkCyJyXmM)
//!
//! Pick an algorithm by [`AlgorithmId`] from an [`AlgorithmRegistry`] and run it:
//!
//! ```
//! use orst_core::{AlgorithmId, AlgorithmRegistry};
//!
//! let registry = AlgorithmRegistry::default();
//! let heap = registry.get(AlgorithmId::Heap).unwrap();
//!
//! let mut values = vec![1, 3, 2, 5, 4];
//! let stats = heap.sort_values(&mut values);
//! assert_eq!(values, vec![1, 2, 3, 4, 5]);
//! assert!(stats.comparisons > 0);
//! ```
//!
//! Or use a sorter directly on anything that is [`Ord`]:
//!
//! ```
//! use orst_core::{BubbleSorter, Sorter};
//!
//! let mut slice = vec!["c", "a", "b"];
//! BubbleSorter.sort(&mut slice);
//! assert_eq!(vec!["a", "b", "c"], slice);
//! ```

mod algorithm;
pub mod benchmark;
mod error;
pub mod input;
mod probe;
pub mod registry;
pub mod render;
pub mod sorters;
pub mod trace;

pub use algorithm::{AlgorithmInfo, Complexity, SortingAlgorithm, Value};
pub use error::{RegistryError, Result};
pub use probe::{Probe, SortStats};
pub use registry::{AlgorithmId, AlgorithmRegistry, RegistryBuilder, SharedAlgorithm};
pub use sorters::{
    BubbleSorter, DutchFlagSorter, HeapSorter, InsertionSorter, MergeSorter, QuickSorter,
    RadixKey, RadixSorter, SelectionSorter, ShellSorter,
};
pub use trace::{Frame, Frames, Step, Trace};

use std::thread::sleep;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Subcommand};
use colored::Colorize;
use prettytable::{row, Table};

use benchmark::BenchConfig;
use input::InputShape;

/// The sorting algorithm must implement the trait `Sorter`.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);
}

/// Where the values to sort come from.
#[derive(Clone, Args, Debug)]
pub struct InputArgs {
    /// Comma separated values to sort. Takes precedence over --len and --shape.
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Vec<Value>,

    /// Number of values to generate.
    #[arg(short = 'n', long, default_value_t = 16)]
    len: usize,

    /// Arrangement of the generated values.
    #[arg(short, long, value_enum, default_value_t = InputShape::Random)]
    shape: InputShape,

    /// Seed for the generated values. Random if not given.
    #[arg(long)]
    seed: Option<u64>,
}

impl InputArgs {
    fn values(&self) -> Vec<Value> {
        if !self.values.is_empty() {
            return self.values.clone();
        }
        let seed = self.seed.unwrap_or_else(rand::random);
        log::debug!("generating {} {:?} values with seed {seed}", self.len, self.shape);
        input::generate(self.shape, self.len, seed)
    }
}

/// Run, trace and benchmark the registered sorting algorithms. Install the `orst` binary and run
/// `orst --help` to see what options are available
#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
pub enum OrstCommands {
    /// List every registered algorithm along with its complexity.
    List,

    /// Sort values with the chosen algorithm and print the result.
    Sort {
        /// Algorithm to run.
        #[arg(short, long, value_enum)]
        algorithm: AlgorithmId,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Print every step the chosen algorithm takes.
    Trace {
        /// Algorithm to trace.
        #[arg(short, long, value_enum)]
        algorithm: AlgorithmId,

        #[command(flatten)]
        input: InputArgs,

        /// Print the trace as JSON instead of drawing it.
        #[arg(long)]
        json: bool,

        /// Skip comparisons and only draw steps that change the values.
        #[arg(long)]
        mutations_only: bool,

        /// Pause between frames, in milliseconds.
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },

    /// Compare every registered algorithm on the same input.
    Bench {
        /// Input sizes to run.
        #[arg(long, value_delimiter = ',', default_values_t = BenchConfig::default().sizes)]
        sizes: Vec<usize>,

        /// Skip quadratic algorithms above this input size.
        #[arg(long, default_value_t = BenchConfig::default().quadratic_limit)]
        quadratic_limit: usize,

        /// Arrangement of the generated values.
        #[arg(short, long, value_enum, default_value_t = InputShape::Random)]
        shape: InputShape,

        /// Seed for the generated values. Random if not given.
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl OrstCommands {
    pub fn run(self, registry: &AlgorithmRegistry) -> anyhow::Result<()> {
        match self {
            OrstCommands::List => print_algorithms(registry),
            OrstCommands::Sort { algorithm, input } => {
                let sorter = registry
                    .get(algorithm)
                    .with_context(|| format!("cannot sort with {algorithm}"))?;
                let mut values = input.values();

                println!("{} {:?}", "Input  ->".bold().blue(), values);
                let stats = sorter.sort_values(&mut values);
                println!("{} {:?}", "Sorted ->".bold().green(), values);
                println!(
                    "{} {} ({stats})",
                    "==>".green().bold(),
                    sorter.name().bold().cyan()
                );
            }
            OrstCommands::Trace {
                algorithm,
                input,
                json,
                mutations_only,
                delay_ms,
            } => {
                let sorter = registry
                    .get(algorithm)
                    .with_context(|| format!("cannot trace {algorithm}"))?;
                let trace = sorter.trace(&input.values());

                if json {
                    let json = serde_json::to_string_pretty(&trace)
                        .context("failed to serialize the trace")?;
                    println!("{json}");
                    return Ok(());
                }

                print_trace(sorter.name(), &trace, mutations_only, delay_ms);
            }
            OrstCommands::Bench {
                sizes,
                quadratic_limit,
                shape,
                seed,
            } => {
                let config = BenchConfig {
                    sizes,
                    quadratic_limit,
                    shape,
                    seed: seed.unwrap_or_else(rand::random),
                };
                benchmark::run_orst(registry, &config);
            }
        }

        Ok(())
    }
}

fn print_algorithms(registry: &AlgorithmRegistry) {
    let mut table = Table::new();
    table.add_row(row![
        "Id".bold(),
        "Name".bold(),
        "Best".bold(),
        "Average".bold(),
        "Worst".bold(),
        "Space".bold(),
        "Stable".bold(),
        "In Place".bold()
    ]);

    let yes_no = |flag: bool| if flag { "yes".green() } else { "no".red() };
    for algorithm in registry.available() {
        let info = algorithm.info();
        table.add_row(row![
            info.id.to_string().cyan(),
            info.name,
            info.best,
            info.average,
            info.worst,
            info.space,
            yes_no(info.stable),
            yes_no(info.in_place)
        ]);
    }

    table.printstd();
}

fn print_trace(name: &str, trace: &Trace<Value>, mutations_only: bool, delay_ms: u64) {
    let bounds = render::bounds(trace.initial());

    println!(
        "\"{}\" on {} values",
        name.magenta().bold().underline(),
        trace.initial().len()
    );
    println!("{:>6} {:<8} {}", 0, "start", render::bars(trace.initial(), None, bounds));

    for (number, frame) in trace.frames().enumerate() {
        if mutations_only && !frame.step.is_mutation() {
            continue;
        }
        println!("{}", render::frame_line(number + 1, &frame, bounds));
        if delay_ms > 0 {
            sleep(Duration::from_millis(delay_ms));
        }
    }

    println!(
        "\n{} {} steps: {}",
        "==>".green().bold(),
        trace.len().to_string().bold().cyan(),
        trace.stats()
    );
}
