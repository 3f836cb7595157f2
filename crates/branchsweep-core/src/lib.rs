//! branchsweep-core: Core library for finding stale remote feature branches
//!
//! This crate lists remote branches through the git CLI, inspects their last
//! commit, filters them by age, and renders the cleanup report.

/// Core error types for branchsweep operations
pub mod error;

/// Configuration handling
pub mod config;

/// Core data types
pub mod types;

/// git CLI wrapper
pub mod git;

/// Remote branch listing
pub mod lister;

/// Commit metadata inspection and issue key extraction
pub mod inspector;

/// Age filter and sort
pub mod filter;

/// HTML report
pub mod report;

/// Deletion command text
pub mod emitter;

/// Full pipeline
pub mod sweep;

// Re-exports for convenience
pub use config::{CONFIG_FILE_NAME, Config, ReportConfig, SweepConfig};
pub use emitter::{deletion_command, deletion_commands};
pub use error::SweepError;
pub use filter::{age_cutoff, filter_stale};
pub use git::GitCli;
pub use inspector::{IssueKeyMatcher, inspect_branches, parse_commit_metadata};
pub use lister::{filter_feature_branches, list_feature_branches};
pub use report::{html_escape, render_report, write_report};
pub use sweep::{SweepOutcome, scan, scan_with};
pub use types::BranchRecord;
