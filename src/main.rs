mod input;
mod logging;
mod model;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::input::InputError;
use crate::input::abundance::load_abundance_table;
use crate::input::results::load_results;
use crate::model::AbundanceLookup;
use crate::report::ReportError;
use crate::report::writer::{ReportKind, write_reports};

#[derive(Debug, Parser)]
#[command(name = "fresco-report", version, about)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render TSV reports from an evaluation results file.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Evaluation results JSON (optionally .gz).
    #[arg(long)]
    input: PathBuf,
    /// Output directory; created if missing.
    #[arg(long)]
    out: PathBuf,
    /// Abundance table TSV with scope, id and abundance columns (optionally .gz).
    #[arg(long)]
    abundance: Option<PathBuf>,
    /// Reports to render; may be repeated.
    #[arg(long = "report", value_enum, default_values_t = [ReportArg::All])]
    reports: Vec<ReportArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportArg {
    All,
    Features,
    Folds,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    input: PathBuf,
    out_dir: PathBuf,
    abundance: Option<PathBuf>,
    reports: Vec<ReportKind>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    let Command::Run(args) = command;
    let config = RunConfig::from(args);

    let results = load_results(&config.input)?;
    let table = config
        .abundance
        .as_deref()
        .map(load_abundance_table)
        .transpose()?;
    let lookup = table.as_ref().map(|t| t as &dyn AbundanceLookup);

    write_reports(&results, lookup, &config.out_dir, &config.reports)?;
    Ok(())
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        RunConfig {
            input: args.input,
            out_dir: args.out,
            abundance: args.abundance,
            reports: resolve_reports(&args.reports),
        }
    }
}

fn resolve_reports(args: &[ReportArg]) -> Vec<ReportKind> {
    let mut kinds = Vec::new();
    for arg in args {
        match arg {
            ReportArg::All => kinds.extend(ReportKind::ALL),
            ReportArg::Features => kinds.push(ReportKind::Features),
            ReportArg::Folds => kinds.push(ReportKind::Folds),
            ReportArg::Summary => kinds.push(ReportKind::Summary),
        }
    }
    kinds.sort();
    kinds.dedup();
    kinds
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
