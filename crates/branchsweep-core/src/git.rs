//! Thin wrapper around the git CLI
//!
//! Every invocation runs as `git -C <repo_root> ...`, so the process working
//! directory is never changed.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use tracing::trace;

use crate::error::SweepError;

/// Format passed to `git show`: author date, relative age, author, short hash
pub const COMMIT_METADATA_FORMAT: &str = "%ai|%ar|%an|%h|";

/// Git CLI bound to one working copy
#[derive(Debug, Clone, Copy)]
pub struct GitCli<'a> {
    repo_root: &'a Path,
}

impl<'a> GitCli<'a> {
    pub fn new(repo_root: &'a Path) -> Self {
        Self { repo_root }
    }

    /// Fail early when the directory is missing or not inside a work tree
    pub fn ensure_repository(&self) -> Result<(), SweepError> {
        let not_a_repo = || SweepError::NotAGitRepository {
            path: self.repo_root.display().to_string(),
        };

        if !self.repo_root.is_dir() {
            return Err(not_a_repo());
        }

        match self.run(["rev-parse", "--is-inside-work-tree"]) {
            Ok(out) if out.trim() == "true" => Ok(()),
            Ok(_) | Err(SweepError::GitCommand { .. }) => Err(not_a_repo()),
            Err(e) => Err(e),
        }
    }

    /// Raw output of `git branch -r`, uncolored regardless of `color.ui`
    pub fn list_remote_branches(&self) -> Result<String, SweepError> {
        self.run(["branch", "-r", "--no-color"])
    }

    /// One-line metadata of the commit `branch` points at
    pub fn show_commit_metadata(&self, branch: &str) -> Result<String, SweepError> {
        let format = format!("--format={}", COMMIT_METADATA_FORMAT);
        self.run(["show", "--no-patch", format.as_str(), branch, "--"])
    }

    fn run<I, S>(&self, args: I) -> Result<String, SweepError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let command = args
            .iter()
            .map(|a| a.as_ref().to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        trace!(repo = %self.repo_root.display(), "git {}", command);

        let output = Command::new("git")
            .arg("-C")
            .arg(self.repo_root)
            .args(&args)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SweepError::GitNotInstalled
                } else {
                    SweepError::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SweepError::GitCommand {
                command,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
