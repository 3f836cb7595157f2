//! Configuration handling for branchsweep
//!
//! Settings come from built-in defaults, optionally overlaid by a
//! `.branchsweep.toml` file in the target repository. The CLI applies its
//! own flag overrides on top.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SweepError;

/// Default config file name, looked up in the target working directory
pub const CONFIG_FILE_NAME: &str = ".branchsweep.toml";

/// branchsweep configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Branch selection and pipeline settings
    #[serde(default)]
    pub sweep: SweepConfig,

    /// HTML report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Branch selection and pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Remote branch prefix a candidate must start with
    pub branch_prefix: String,

    /// Remote name used in deletion commands
    pub remote: String,

    /// Branches with a last commit older than this many months are stale
    pub max_age_months: u32,

    /// Maximum number of concurrent `git show` invocations
    pub jobs: usize,

    /// Report file name, relative to the invocation directory
    pub output: String,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            branch_prefix: "origin/feature/".to_string(),
            remote: "origin".to_string(),
            max_age_months: 1,
            jobs: 8,
            output: "branches.html".to_string(),
        }
    }
}

/// HTML report settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Page title and description
    pub title: String,

    /// Issue tracker project key embedded in branch names
    pub issue_project: String,

    /// Base URL issue keys are appended to
    pub issue_tracker_url: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "GUI feature branches to delete".to_string(),
            issue_project: "NECS".to_string(),
            issue_tracker_url: "https://jira.unicorn.com/browse".to_string(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text and check its values
    pub fn from_toml(content: &str) -> Result<Self, SweepError> {
        let config: Config =
            toml::from_str(content).map_err(|e| SweepError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config for a run
    ///
    /// An explicit path must exist. Without one, `<workdir>/.branchsweep.toml`
    /// is used when present and defaults otherwise.
    pub fn load(workdir: &Path, explicit: Option<&Path>) -> Result<Self, SweepError> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(SweepError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let candidate = workdir.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, workdir.display());
                    return Ok(Config::default());
                }
                candidate
            }
        };

        debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Reject values the pipeline cannot work with
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.sweep.branch_prefix.trim().is_empty() {
            return Err(SweepError::Config("branch_prefix must not be empty".to_string()));
        }
        if self.sweep.max_age_months == 0 {
            return Err(SweepError::Config("max_age_months must be at least 1".to_string()));
        }
        if self.sweep.jobs == 0 {
            return Err(SweepError::Config("jobs must be at least 1".to_string()));
        }
        if self.report.issue_project.is_empty()
            || !self
                .report
                .issue_project
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        {
            return Err(SweepError::Config(format!(
                "issue_project must be alphanumeric: {:?}",
                self.report.issue_project
            )));
        }
        Ok(())
    }
}
