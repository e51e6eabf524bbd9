//! Runs every registered algorithm over the same random input and compares the work they do.

use std::time::{Duration, Instant};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use prettytable::{row, Table};

use crate::input::{self, InputShape};
use crate::probe::SortStats;
use crate::registry::{AlgorithmId, AlgorithmRegistry};
use crate::SortingAlgorithm;

const ZERO: usize = 0;
const ONE: usize = 1;
const HUNDRED: usize = 100;
const THOUSAND: usize = 1_000;
const TEN_THOUSAND: usize = 10_000;

/// What to benchmark.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    /// Quadratic algorithms are skipped for inputs longer than this.
    pub quadratic_limit: usize,
    pub shape: InputShape,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![ZERO, ONE, HUNDRED, THOUSAND, TEN_THOUSAND],
            quadratic_limit: TEN_THOUSAND,
            shape: InputShape::Random,
            seed: 0,
        }
    }
}

/// How one algorithm fared on one input size.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Finished { stats: SortStats, elapsed: Duration },
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    pub algorithm: AlgorithmId,
    pub name: &'static str,
    pub size: usize,
    pub outcome: Outcome,
}

/// Runs the benchmark, printing a table per input size as it goes.
pub fn run_orst(registry: &AlgorithmRegistry, config: &BenchConfig) -> Vec<BenchResult> {
    let algorithms = registry.available();
    let pb = ProgressBar::new((algorithms.len() * config.sizes.len()) as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "Benchmark -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] ({pos}/{len}) {msg}",
    ) {
        pb.set_style(style);
    }

    let mut results = Vec::with_capacity(algorithms.len() * config.sizes.len());
    for &n in &config.sizes {
        let values = input::generate(config.shape, n, config.seed);
        info!("benchmarking {} algorithms on {n} values", algorithms.len());

        let mut size_results = Vec::with_capacity(algorithms.len());
        for algorithm in &algorithms {
            pb.set_message(format!("{} on {n}", algorithm.name()));

            let outcome = if algorithm.info().is_quadratic() && n > config.quadratic_limit {
                debug!("skipping {} on {n} values", algorithm.id());
                Outcome::Skipped
            } else {
                let mut values = values.clone();
                let now = Instant::now();
                let stats = algorithm.sort_values(&mut values);
                let elapsed = now.elapsed();
                debug_assert!(values.windows(2).all(|w| w[0] <= w[1]));
                Outcome::Finished { stats, elapsed }
            };

            size_results.push(BenchResult {
                algorithm: algorithm.id(),
                name: algorithm.name(),
                size: n,
                outcome,
            });
            pb.inc(1);
        }

        pb.suspend(|| print_table(n, config.quadratic_limit, &size_results));
        results.extend(size_results);
    }
    pb.finish_and_clear();

    results
}

fn print_table(n: usize, quadratic_limit: usize, results: &[BenchResult]) {
    println!(
        "{} {}",
        "List Size -> ".bold().underline().blue(),
        n.to_string().bold()
    );

    let mut table = Table::new();
    table.add_row(row![
        "Sorter".bold(),
        "Comparisons".bold(),
        "Swaps".bold(),
        "Writes".bold(),
        "Time Taken".bold()
    ]);

    for result in results {
        match &result.outcome {
            Outcome::Finished { stats, elapsed } => table.add_row(row![
                result.name,
                stats.comparisons.to_string(),
                stats.swaps.to_string(),
                stats.writes.to_string(),
                format!("{elapsed:?}")
            ]),
            Outcome::Skipped => table.add_row(row![
                result.name,
                "Skipped".red(),
                "-",
                "-",
                format!("quadratic above {quadratic_limit}")
            ]),
        };
    }

    table.printstd();
    println!();
}
