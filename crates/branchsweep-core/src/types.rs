//! Core data types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A remote branch and the metadata of its last commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRecord {
    /// Full remote ref, e.g. `origin/feature/NECS-123-foo`
    pub name: String,
    /// Commit author display name
    pub author: String,
    /// Calendar date of the last commit
    pub date: NaiveDate,
    /// Relative age as reported by git ("3 months ago")
    pub ago: String,
    /// Abbreviated commit hash
    pub hash: String,
    /// Upper-cased issue key parsed from the branch name
    pub issue_key: Option<String>,
}

impl BranchRecord {
    /// Date formatted as `YYYY-MM-DD`
    pub fn formatted_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
