//! Remote feature branch discovery

use tracing::debug;

use crate::error::SweepError;
use crate::git::GitCli;

/// Keep the trimmed lines of `git branch -r` output that start with `prefix`
///
/// Order is preserved as emitted by git.
pub fn filter_feature_branches(branch_output: &str, prefix: &str) -> Vec<String> {
    branch_output
        .lines()
        .map(str::trim)
        .filter(|branch| branch.starts_with(prefix))
        .map(str::to_string)
        .collect()
}

/// List the remote branches of the repository that match `prefix`
pub fn list_feature_branches(git: &GitCli<'_>, prefix: &str) -> Result<Vec<String>, SweepError> {
    let output = git.list_remote_branches()?;
    let branches = filter_feature_branches(&output, prefix);
    debug!(
        "{} of {} remote branches match {}",
        branches.len(),
        output.lines().count(),
        prefix
    );
    Ok(branches)
}
