//! Per-branch commit inspection
//!
//! Each candidate branch gets one `git show` call. Calls fan out over a
//! bounded rayon pool and are joined before returning; the first failure
//! fails the whole batch.

use chrono::NaiveDate;
use rayon::prelude::*;
use regex::Regex;
use tracing::debug;

use crate::error::SweepError;
use crate::git::GitCli;
use crate::types::BranchRecord;

/// Extracts issue keys such as `NECS-42` from branch names
#[derive(Debug, Clone)]
pub struct IssueKeyMatcher {
    pattern: Regex,
}

impl IssueKeyMatcher {
    /// Build a matcher for `<prefix>...<project>-<digits>...`
    ///
    /// The project key matches case-insensitively. When a name holds more
    /// than one key, the last one wins.
    pub fn new(prefix: &str, project: &str) -> Result<Self, SweepError> {
        let pattern = format!(
            r"^{}.*((?i:{})-[0-9]+)",
            regex::escape(prefix),
            regex::escape(project)
        );
        let pattern = Regex::new(&pattern)
            .map_err(|e| SweepError::Config(format!("invalid issue key pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    /// Upper-cased issue key, if the branch name contains one
    pub fn extract(&self, branch: &str) -> Option<String> {
        self.pattern
            .captures(branch)
            .and_then(|caps| caps.get(1))
            .map(|key| key.as_str().to_uppercase())
    }
}

/// Build a record from one line of `git show --format=%ai|%ar|%an|%h|`
pub fn parse_commit_metadata(
    branch: &str,
    line: &str,
    matcher: &IssueKeyMatcher,
) -> Result<BranchRecord, SweepError> {
    let malformed = || SweepError::MalformedMetadata {
        branch: branch.to_string(),
        line: line.to_string(),
    };

    let mut fields = line.trim().split('|');
    let (Some(time), Some(ago), Some(author), Some(hash)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed());
    };

    let invalid_date = || SweepError::InvalidDate {
        branch: branch.to_string(),
        value: time.to_string(),
    };
    let day = time.get(..10).ok_or_else(invalid_date)?;
    let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| invalid_date())?;

    Ok(BranchRecord {
        name: branch.to_string(),
        author: author.to_string(),
        date,
        ago: ago.to_string(),
        hash: hash.to_string(),
        issue_key: matcher.extract(branch),
    })
}

/// Inspect a single branch
pub fn inspect_branch(
    git: &GitCli<'_>,
    branch: &str,
    matcher: &IssueKeyMatcher,
) -> Result<BranchRecord, SweepError> {
    let line = git.show_commit_metadata(branch)?;
    let record = parse_commit_metadata(branch, &line, matcher)?;
    debug!(branch, date = %record.date, author = %record.author, "inspected");
    Ok(record)
}

/// Inspect all branches with at most `jobs` concurrent git processes
///
/// Results keep the input order.
pub fn inspect_branches(
    git: &GitCli<'_>,
    branches: &[String],
    matcher: &IssueKeyMatcher,
    jobs: usize,
) -> Result<Vec<BranchRecord>, SweepError> {
    inspect_branches_with(git, branches, matcher, jobs, |_| {})
}

/// Like [`inspect_branches`], calling `on_inspected` after each success
pub fn inspect_branches_with<F>(
    git: &GitCli<'_>,
    branches: &[String],
    matcher: &IssueKeyMatcher,
    jobs: usize,
    on_inspected: F,
) -> Result<Vec<BranchRecord>, SweepError>
where
    F: Fn(&BranchRecord) + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.max(1))
        .thread_name(|i| format!("branchsweep-inspect-{}", i))
        .build()
        .map_err(|e| SweepError::WorkerPool(e.to_string()))?;

    debug!("inspecting {} branches with {} workers", branches.len(), jobs.max(1));

    pool.install(|| {
        branches
            .par_iter()
            .map(|branch| {
                let record = inspect_branch(git, branch, matcher)?;
                on_inspected(&record);
                Ok(record)
            })
            .collect()
    })
}
