//! CLI argument parsing with clap derive

use std::path::PathBuf;

use clap::Parser;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// branchsweep - Find stale remote feature branches
#[derive(Parser, Debug)]
#[command(name = "branchsweep")]
#[command(version = VERSION)]
#[command(about = "Find stale remote feature branches and report them for cleanup")]
#[command(long_about = "Find stale remote feature branches and report them for cleanup.\n\nLists remote branches matching the feature prefix (origin/feature/ by default), reads the last commit of each, and keeps those older than the age threshold.\n\nOutputs:\n  branches.html               HTML table of stale branches (in the current directory)\n  git push origin --delete    One command per stale branch, printed for manual review\n\nNothing is deleted. Settings can also be placed in <WORKDIR>/.branchsweep.toml.")]
pub struct Cli {
    /// Git working copy to inspect
    pub workdir: PathBuf,

    /// Report path, relative to the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of concurrent git inspections
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub jobs: Option<u32>,

    /// Branches older than this many months are reported
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_age_months: Option<u32>,

    /// Config file (default: <WORKDIR>/.branchsweep.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not write the HTML report
    #[arg(long)]
    pub no_report: bool,

    /// Increase output verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}
