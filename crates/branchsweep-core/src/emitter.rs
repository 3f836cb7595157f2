//! Advisory deletion commands
//!
//! Commands are only produced as text for a human to review. Nothing here
//! deletes a branch.

use crate::types::BranchRecord;

/// `git push <remote> --delete <branch>` for one record
pub fn deletion_command(remote: &str, record: &BranchRecord) -> String {
    format!("git push {} --delete {}", remote, record.name)
}

/// One deletion command per record, in the same order
pub fn deletion_commands(remote: &str, records: &[BranchRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| deletion_command(remote, record))
        .collect()
}
