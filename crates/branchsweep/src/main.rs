//! branchsweep CLI - Find stale remote feature branches and report them for cleanup

mod cli;
mod colors;
mod commands;
mod logging;
mod output;

use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::parse();
    logging::init(cli.verbose);

    match commands::run_sweep(&cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
