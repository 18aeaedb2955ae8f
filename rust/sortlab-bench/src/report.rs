//! Report rendering.
//!
//! The table format is semicolon-delimited with every cell terminated by
//! `;`:
//!
//! ```text
//! Size;naiveSort;bubbleSort;...;quickSort;
//! 500;812.345000;1034.118000;...;21.902000;
//! 1000;FAIL;...
//! ```

use std::io::Write;

use sortlab_core::Algorithm;

use crate::config::OutputFormat;
use crate::error::BenchError;
use crate::harness::{BenchReport, Outcome, Row};

pub const FAIL_TOKEN: &str = "FAIL";

pub fn write_table_header<W: Write>(out: &mut W, algorithms: &[Algorithm]) -> std::io::Result<()> {
    write!(out, "Size;")?;
    for algorithm in algorithms {
        write!(out, "{};", algorithm.name())?;
    }
    writeln!(out)
}

pub fn write_table_row<W: Write>(out: &mut W, row: &Row) -> std::io::Result<()> {
    write!(out, "{};", row.size)?;
    for outcome in &row.outcomes {
        match outcome {
            Outcome::Micros(us) => write!(out, "{:.6};", us)?,
            Outcome::Fail => write!(out, "{};", FAIL_TOKEN)?,
        }
    }
    writeln!(out)
}

pub fn write_table<W: Write>(out: &mut W, report: &BenchReport) -> std::io::Result<()> {
    write_table_header(out, &report.algorithms)?;
    for row in &report.rows {
        write_table_row(out, row)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &BenchReport) -> Result<(), BenchError> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Render a finished report in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &BenchReport,
    format: OutputFormat,
) -> Result<(), BenchError> {
    match format {
        OutputFormat::Table => write_table(out, report)?,
        OutputFormat::Json => write_json(out, report)?,
    }
    Ok(())
}
