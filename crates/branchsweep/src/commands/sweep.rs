//! Implementation of the sweep: scan, write the report, print commands

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use branchsweep_core::{Config, SweepError, render_report, scan_with, write_report};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::cli::Cli;
use crate::colors::COLORS;
use crate::output::{JsonIssue, JsonResponse, SweepData};

/// Run the sweep and return the process exit code
pub fn run_sweep(cli: &Cli) -> Result<i32, String> {
    match sweep(cli) {
        Ok(data) => {
            if cli.json {
                let response = JsonResponse::ok("sweep", data);
                print_json(&response)?;
            } else {
                for command in &data.delete_commands {
                    println!("{}", command);
                }
            }
            Ok(0)
        }
        Err(err) => {
            let sweep_err = err.downcast_ref::<SweepError>();
            let code = sweep_err.map(SweepError::exit_code).unwrap_or(1);

            if cli.json {
                let issue = match sweep_err {
                    Some(e) => JsonIssue::from(e),
                    None => JsonIssue {
                        code: "E000".to_string(),
                        severity: "error".to_string(),
                        message: format!("{:#}", err),
                    },
                };
                let response = JsonResponse::error("sweep", SweepData::default(), vec![issue]);
                print_json(&response)?;
            } else {
                eprintln!("{} {:#}", "error:".style(COLORS.fail), err);
            }
            Ok(code)
        }
    }
}

fn print_json<T: serde::Serialize>(response: &JsonResponse<T>) -> Result<(), String> {
    let text = serde_json::to_string_pretty(response).map_err(|e| e.to_string())?;
    println!("{}", text);
    Ok(())
}

/// Built-in defaults, then the config file, then CLI flags
pub fn resolve_config(cli: &Cli, workdir: &Path) -> anyhow::Result<Config> {
    let mut config = Config::load(workdir, cli.config.as_deref())?;

    if let Some(jobs) = cli.jobs {
        config.sweep.jobs = jobs as usize;
    }
    if let Some(months) = cli.max_age_months {
        config.sweep.max_age_months = months;
    }

    config.validate()?;
    Ok(config)
}

/// `--output` wins over the configured name; relative paths resolve
/// against the invocation directory
pub fn resolve_output_path(
    invocation_dir: &Path,
    cli_output: Option<&Path>,
    config_output: &str,
) -> PathBuf {
    let output = cli_output.unwrap_or_else(|| Path::new(config_output));
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        invocation_dir.join(output)
    }
}

fn progress_bar(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} {pos} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message("Inspecting branches");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn sweep(cli: &Cli) -> anyhow::Result<SweepData> {
    let chatty = !cli.quiet && !cli.json;

    let invocation_dir =
        std::env::current_dir().context("failed to read the current directory")?;
    let workdir = cli
        .workdir
        .canonicalize()
        .map_err(|_| SweepError::NotAGitRepository {
            path: cli.workdir.display().to_string(),
        })?;

    let config = resolve_config(cli, &workdir)?;
    debug!(?config, "resolved configuration");

    if chatty {
        println!(
            "{}",
            format!("Switched to working directory: {}", workdir.display()).style(COLORS.active)
        );
        println!("{}", "Loading feature branch list...".style(COLORS.active));
    }

    let today = Local::now().date_naive();
    let pb = progress_bar(chatty && std::io::stderr().is_terminal());
    let outcome = scan_with(&workdir, &config, today, |_| pb.inc(1));
    pb.finish_and_clear();
    let outcome = outcome.with_context(|| format!("failed to scan {}", workdir.display()))?;

    if chatty {
        println!(
            "{}",
            format!("Total number of branches: {}", outcome.branches.len()).style(COLORS.warning)
        );
    }

    let report = if cli.no_report {
        None
    } else {
        let path = resolve_output_path(
            &invocation_dir,
            cli.output.as_deref(),
            &config.sweep.output,
        );
        let html = render_report(&outcome.branches, &config.report);
        write_report(&path, &html)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        if chatty {
            println!(
                "{}",
                format!("HTML written to {}", path.display()).style(COLORS.success)
            );
        }
        Some(path.display().to_string())
    };

    Ok(SweepData {
        workdir: workdir.display().to_string(),
        report,
        cutoff: Some(outcome.cutoff.format("%Y-%m-%d").to_string()),
        scanned: outcome.scanned,
        branches: outcome.branches,
        delete_commands: outcome.delete_commands,
    })
}
