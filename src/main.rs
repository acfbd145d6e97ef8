//! sha12csv - List the SHA-1 sum of files in a folder in a CSV
//!
//! Entry point for the CLI application.

use anyhow::Result;
use clap::Parser;
use sha12csv::output::{csv_path, write_csv};
use sha12csv::pool::{HashPool, DEFAULT_WORKERS};
use sha12csv::walk::collect_files;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, trace};
use tracing_subscriber::EnvFilter;

/// Recursive SHA-1 hasher with CSV output
#[derive(Parser, Debug)]
#[command(
    name = "sha12csv",
    about = "List the sha1 sum of files in a folder in a csv"
)]
struct CliArgs {
    /// Directory to scan recursively
    #[arg(value_name = "DIR")]
    dir: PathBuf,

    /// Print the files being processed
    #[arg(short = 'V', long)]
    verbose: bool,

    /// Set the number of workers
    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_WORKERS,
        value_name = "NUM",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    workers: usize,

    /// The name of the output file, defaults to sha1sum.csv
    #[arg(short = 'n', long, default_value = "sha1sum", value_name = "NAME")]
    name: String,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<()> {
    let files = collect_files(&args.dir)?;
    trace!(num_files = files.len(), "done walking directory");

    let records = HashPool::new().with_workers(args.workers).run(files);

    let output = csv_path(&args.name);
    write_csv(&records, &output)?;
    trace!(num_files = records.len(), output = %output.display(), "wrote csv");

    Ok(())
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sha12csv=trace")
    } else {
        EnvFilter::new("sha12csv=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
