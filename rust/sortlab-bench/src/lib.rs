//! Sortlab Benchmark Harness
//!
//! Times every sorting algorithm across a range of input sizes on fresh
//! pseudo-random arrays, checks each result for sortedness, and reports
//! microsecond timings (or `FAIL`) as a semicolon-delimited table or JSON.

pub mod config;
pub mod error;
pub mod generate;
pub mod harness;
pub mod report;

pub use config::{BenchConfig, OutputFormat, Overrides, SizeSpec};
pub use error::BenchError;
pub use generate::InputGenerator;
pub use harness::{run_trial, run_trial_with, BenchReport, Harness, Outcome, Row};
