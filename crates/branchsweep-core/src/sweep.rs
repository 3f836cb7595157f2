//! End-to-end stale branch scan
//!
//! List, inspect, filter, then derive deletion commands. Report writing and
//! terminal output stay with the caller.

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::config::Config;
use crate::emitter::deletion_commands;
use crate::error::SweepError;
use crate::filter::{age_cutoff, filter_stale};
use crate::git::GitCli;
use crate::inspector::{IssueKeyMatcher, inspect_branches_with};
use crate::lister::list_feature_branches;
use crate::types::BranchRecord;

/// Result of one scan
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    /// Branches dated before this day are stale
    pub cutoff: NaiveDate,
    /// Number of branches that matched the prefix and were inspected
    pub scanned: usize,
    /// Stale branches, oldest first
    pub branches: Vec<BranchRecord>,
    /// One deletion command per stale branch
    pub delete_commands: Vec<String>,
}

/// Scan `workdir` for stale feature branches as of `today`
pub fn scan(workdir: &Path, config: &Config, today: NaiveDate) -> Result<SweepOutcome, SweepError> {
    scan_with(workdir, config, today, |_| {})
}

/// Like [`scan`], calling `on_inspected` as each branch finishes
pub fn scan_with<F>(
    workdir: &Path,
    config: &Config,
    today: NaiveDate,
    on_inspected: F,
) -> Result<SweepOutcome, SweepError>
where
    F: Fn(&BranchRecord) + Sync,
{
    config.validate()?;
    let cutoff = age_cutoff(today, config.sweep.max_age_months)?;
    let matcher = IssueKeyMatcher::new(&config.sweep.branch_prefix, &config.report.issue_project)?;

    let git = GitCli::new(workdir);
    git.ensure_repository()?;

    let candidates = list_feature_branches(&git, &config.sweep.branch_prefix)?;
    info!("found {} candidate branches", candidates.len());

    let records = inspect_branches_with(
        &git,
        &candidates,
        &matcher,
        config.sweep.jobs,
        on_inspected,
    )?;
    let branches = filter_stale(records, cutoff);
    info!("{} branches older than {}", branches.len(), cutoff);

    let delete_commands = deletion_commands(&config.sweep.remote, &branches);

    Ok(SweepOutcome {
        cutoff,
        scanned: candidates.len(),
        branches,
        delete_commands,
    })
}
