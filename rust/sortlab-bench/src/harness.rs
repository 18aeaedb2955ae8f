//! Trial runner: one fresh array per (size, algorithm), timed and checked.

use std::time::Instant;

use serde::{Serialize, Serializer};
use sortlab_core::{is_sorted, Algorithm, Key};
use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::generate::InputGenerator;

/// Result of a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Elapsed wall-clock time in microseconds.
    Micros(f64),
    /// The algorithm returned but left the array unsorted.
    Fail,
}

impl Outcome {
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail)
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Micros(us) => serializer.serialize_f64(*us),
            Outcome::Fail => serializer.serialize_str("FAIL"),
        }
    }
}

/// Outcomes for one input size, in algorithm column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub size: usize,
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    /// Seed the inputs were generated from; rerun with it to reproduce.
    pub seed: u64,
    pub algorithms: Vec<Algorithm>,
    pub rows: Vec<Row>,
}

impl BenchReport {
    pub fn failures(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.outcomes)
            .filter(|o| o.is_fail())
            .count()
    }
}

/// Time `sort` on `data`, then validate the result.
pub fn run_trial_with<F>(sort: F, data: &mut [Key]) -> Outcome
where
    F: FnOnce(&mut [Key]),
{
    let start = Instant::now();
    sort(data);
    let elapsed = start.elapsed();

    if is_sorted(data) {
        Outcome::Micros(elapsed.as_secs_f64() * 1_000_000.0)
    } else {
        Outcome::Fail
    }
}

pub fn run_trial(algorithm: Algorithm, data: &mut [Key]) -> Outcome {
    run_trial_with(|w| algorithm.sort(w), data)
}

pub struct Harness {
    config: BenchConfig,
    seed: u64,
    generator: InputGenerator,
}

impl Harness {
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        config.validate()?;
        // Resolve the seed up front so unseeded runs can still be replayed.
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let generator = InputGenerator::new(Some(seed));
        Ok(Self {
            config,
            seed,
            generator,
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Seed of this run, drawn from entropy when the config has none.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run every trial for one input size.
    pub fn run_size(&mut self, size: usize) -> Row {
        let mut outcomes = Vec::with_capacity(self.config.algorithms.len());
        for &algorithm in &self.config.algorithms {
            let mut data = self.generator.array(size);
            let outcome = run_trial(algorithm, &mut data);
            match outcome {
                Outcome::Micros(us) => debug!(%algorithm, size, micros = us, "trial finished"),
                Outcome::Fail => warn!(%algorithm, size, seed = self.seed, "output not sorted"),
            }
            outcomes.push(outcome);
        }
        Row { size, outcomes }
    }

    /// Run all sizes, handing each row to `on_row` as soon as it is done.
    pub fn run_each<F>(&mut self, mut on_row: F) -> Result<BenchReport, BenchError>
    where
        F: FnMut(&Row) -> Result<(), BenchError>,
    {
        let sizes = self.config.sizes.sizes();
        info!(
            sizes = sizes.len(),
            algorithms = self.config.algorithms.len(),
            seed = self.seed,
            "starting benchmark"
        );

        let mut rows = Vec::with_capacity(sizes.len());
        for size in sizes {
            let row = self.run_size(size);
            on_row(&row)?;
            rows.push(row);
        }

        let report = BenchReport {
            seed: self.seed,
            algorithms: self.config.algorithms.clone(),
            rows,
        };
        info!(failures = report.failures(), "benchmark finished");
        Ok(report)
    }

    pub fn run(&mut self) -> Result<BenchReport, BenchError> {
        self.run_each(|_| Ok(()))
    }
}
