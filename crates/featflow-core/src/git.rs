//! Thin wrapper over the `git` executable.
//!
//! Every invocation yields a [`GitOutput`]; failures (including a missing
//! `git` binary) are values, never errors, so callers decide which git
//! failures are fatal.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Outcome of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    /// Trimmed stdout followed by trimmed stderr.
    pub output: String,
}

impl GitOutput {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
        }
    }

    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }
}

/// Something that can run git subcommands against one repository.
pub trait Vcs {
    fn run(&self, args: &[&str]) -> GitOutput;
}

/// Runs the real `git` binary, optionally in a fixed working directory.
#[derive(Debug, Clone, Default)]
pub struct Git {
    cwd: Option<PathBuf>,
}

impl Git {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(dir.into()),
        }
    }
}

impl Vcs for Git {
    fn run(&self, args: &[&str]) -> GitOutput {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        tracing::debug!(args = ?args, "git");
        let result = match cmd.output() {
            Ok(out) => {
                let stdout = String::from_utf8_lossy(&out.stdout);
                let stderr = String::from_utf8_lossy(&out.stderr);
                GitOutput {
                    success: out.status.success(),
                    output: format!("{}{}", stdout.trim(), stderr.trim()),
                }
            }
            Err(e) => GitOutput::failed(e.to_string()),
        };
        if !result.success {
            tracing::debug!(args = ?args, output = %result.output, "git failed");
        }
        result
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Top-level directory of the repository containing the vcs working dir.
pub fn toplevel(vcs: &impl Vcs) -> Option<PathBuf> {
    let out = vcs.run(&["rev-parse", "--show-toplevel"]);
    (out.success && !out.output.is_empty()).then(|| PathBuf::from(out.output.trim()))
}

/// Currently checked-out branch, defaulting to `main` when git cannot say.
pub fn current_branch(vcs: &impl Vcs) -> String {
    let out = vcs.run(&["branch", "--show-current"]);
    if out.success && !out.output.is_empty() {
        out.output.trim().to_string()
    } else {
        "main".to_string()
    }
}

pub fn ref_exists(vcs: &impl Vcs, full_ref: &str) -> bool {
    vcs.run(&["show-ref", "--verify", full_ref]).success
}

/// True when `branch` exists locally or as a remote-tracking ref on `remote`.
pub fn branch_exists(vcs: &impl Vcs, branch: &str, remote: &str) -> bool {
    ref_exists(vcs, &format!("refs/heads/{branch}"))
        || ref_exists(vcs, &format!("refs/remotes/{remote}/{branch}"))
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

pub fn fetch(vcs: &impl Vcs, remote: &str) -> GitOutput {
    vcs.run(&["fetch", remote])
}

pub fn create_branch(vcs: &impl Vcs, branch: &str, from: &str) -> GitOutput {
    vcs.run(&["branch", branch, from])
}

pub fn worktree_add(vcs: &impl Vcs, path: &Path, branch: &str) -> GitOutput {
    let path = path.to_string_lossy();
    vcs.run(&["worktree", "add", &*path, branch])
}

pub fn worktree_list(vcs: &impl Vcs) -> GitOutput {
    vcs.run(&["worktree", "list", "--porcelain"])
}

pub fn worktree_remove(vcs: &impl Vcs, path: &Path) -> GitOutput {
    let path = path.to_string_lossy();
    vcs.run(&["worktree", "remove", &*path, "--force"])
}

// ---------------------------------------------------------------------------
// Test double
// ---------------------------------------------------------------------------
