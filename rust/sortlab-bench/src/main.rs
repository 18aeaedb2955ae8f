//! sortlab-bench — time every sorting algorithm across input sizes.

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use sortlab_bench::config::{BenchConfig, OutputFormat, Overrides};
use sortlab_bench::error::BenchError;
use sortlab_bench::harness::Harness;
use sortlab_bench::report;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sortlab-bench",
    version,
    about = "Benchmark the sortlab sorting algorithms on random input"
)]
struct Args {
    /// Config file (default: nearest sortlab.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for input generation
    #[arg(long)]
    seed: Option<u64>,
    /// Number of input sizes
    #[arg(long)]
    count: Option<usize>,
    /// Distance between consecutive input sizes
    #[arg(long)]
    step: Option<usize>,
    /// Comma-separated algorithms to run, e.g. `quick,merge,heapSort`
    #[arg(long, value_delimiter = ',')]
    algorithms: Option<Vec<String>>,
    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Print the default config template and exit
    #[arg(long)]
    print_config: bool,
    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sortlab_bench={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), BenchError> {
    let mut config = match &args.config {
        Some(path) => BenchConfig::load_from(path)?,
        None => BenchConfig::load()?,
    };
    config.apply(Overrides {
        seed: args.seed,
        count: args.count,
        step: args.step,
        algorithms: args.algorithms,
        format: args.format,
    })?;

    let format = config.format;
    let mut harness = Harness::new(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Table => {
            report::write_table_header(&mut out, &harness.config().algorithms)?;
            out.flush()?;
            harness.run_each(|row| {
                report::write_table_row(&mut out, row)?;
                out.flush()?;
                Ok(())
            })?;
        }
        OutputFormat::Json => {
            let results = harness.run()?;
            report::write_json(&mut out, &results)?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if args.print_config {
        print!("{}", BenchConfig::default_template());
        return;
    }

    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\x1b[31merror:\x1b[0m {}", e);
        std::process::exit(1);
    }
}
