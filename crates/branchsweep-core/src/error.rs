//! Error types for branchsweep operations

use thiserror::Error;

/// Core error type for branchsweep operations
#[derive(Error, Debug)]
pub enum SweepError {
    /// E001: git binary could not be launched
    #[error("E001: git is not installed or not found in PATH")]
    GitNotInstalled,

    /// E002: Target directory is not a git working copy
    #[error("E002: not a git repository: {path}")]
    NotAGitRepository { path: String },

    /// E003: git exited with a failure status
    #[error("E003: git {command} failed: {stderr}")]
    GitCommand { command: String, stderr: String },

    /// E004: `git show` output did not have the expected fields
    #[error("E004: malformed commit metadata for {branch}: {line:?}")]
    MalformedMetadata { branch: String, line: String },

    /// E005: Commit date could not be parsed
    #[error("E005: invalid commit date for {branch}: {value:?}")]
    InvalidDate { branch: String, value: String },

    /// E006: Configuration error
    #[error("E006: configuration error: {0}")]
    Config(String),

    /// E007: IO error
    #[error("E007: IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E008: Inspection worker pool could not be started
    #[error("E008: failed to start worker pool: {0}")]
    WorkerPool(String),
}

impl SweepError {
    /// Get the error code (e.g., "E001", "E002")
    pub fn code(&self) -> &'static str {
        match self {
            SweepError::GitNotInstalled => "E001",
            SweepError::NotAGitRepository { .. } => "E002",
            SweepError::GitCommand { .. } => "E003",
            SweepError::MalformedMetadata { .. } => "E004",
            SweepError::InvalidDate { .. } => "E005",
            SweepError::Config(_) => "E006",
            SweepError::Io(_) => "E007",
            SweepError::WorkerPool(_) => "E008",
        }
    }

    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::GitNotInstalled => 5, // git missing

            SweepError::NotAGitRepository { .. } => 9,

            SweepError::GitCommand { .. }
            | SweepError::MalformedMetadata { .. }
            | SweepError::InvalidDate { .. } => 1, // Inspection errors

            SweepError::Io(_) => 2, // File errors

            SweepError::Config(_) => 4,

            SweepError::WorkerPool(_) => 3,
        }
    }
}
