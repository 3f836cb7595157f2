//! JSON output formatting

use branchsweep_core::{BranchRecord, SweepError};
use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: &str = "1";

/// JSON response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Command that generated this response
    pub command: String,
    /// Status: "ok" or "error"
    pub status: String,
    /// Command-specific payload
    pub data: T,
    /// Errors encountered
    pub issues: Vec<JsonIssue>,
}

impl<T> JsonResponse<T> {
    /// Create a successful response
    pub fn ok(command: &str, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "ok".to_string(),
            data,
            issues: vec![],
        }
    }

    /// Create an error response
    pub fn error(command: &str, data: T, issues: Vec<JsonIssue>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "error".to_string(),
            data,
            issues,
        }
    }
}

/// Issue object structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonIssue {
    /// Error code (e.g., "E002")
    pub code: String,
    /// Severity level
    pub severity: String,
    /// Human-readable message
    pub message: String,
}

impl From<&SweepError> for JsonIssue {
    fn from(err: &SweepError) -> Self {
        Self {
            code: err.code().to_string(),
            severity: "error".to_string(),
            message: err.to_string(),
        }
    }
}

/// Data payload for the sweep command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepData {
    /// Canonical path of the inspected working copy
    pub workdir: String,
    /// Written report, if any
    pub report: Option<String>,
    /// Branches dated before this day are stale (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<String>,
    /// Number of prefix-matching branches inspected
    pub scanned: usize,
    /// Stale branches, oldest first
    pub branches: Vec<BranchRecord>,
    /// Deletion commands, same order as `branches`
    pub delete_commands: Vec<String>,
}
