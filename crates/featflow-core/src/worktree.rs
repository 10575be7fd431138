use crate::config::Config;
use crate::error::{FlowError, Result};
use crate::git::{self, Vcs};
use serde::Serialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// One record of `git worktree list --porcelain`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorktreeEntry {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bare: bool,
}

impl WorktreeEntry {
    /// Branch without the `refs/heads/` prefix, `unknown` when detached.
    pub fn short_branch(&self) -> &str {
        match &self.branch {
            Some(b) => b.strip_prefix("refs/heads/").unwrap_or(b),
            None => "unknown",
        }
    }
}

/// Parse porcelain output. A `worktree ` line opens a record; a blank line
/// closes it. Unknown attribute lines (`detached`, `locked`, ...) are skipped.
pub fn parse_porcelain(text: &str) -> Vec<WorktreeEntry> {
    let mut entries = Vec::new();
    let mut current: Option<WorktreeEntry> = None;

    for line in text.lines() {
        if let Some(path) = line.strip_prefix("worktree ") {
            entries.extend(current.take());
            current = Some(WorktreeEntry {
                path: PathBuf::from(path),
                ..WorktreeEntry::default()
            });
        } else if line.trim().is_empty() {
            entries.extend(current.take());
        } else if let Some(entry) = current.as_mut() {
            if let Some(head) = line.strip_prefix("HEAD ") {
                entry.head = Some(head.to_string());
            } else if let Some(branch) = line.strip_prefix("branch ") {
                entry.branch = Some(branch.to_string());
            } else if line == "bare" {
                entry.bare = true;
            }
        }
    }
    entries.extend(current);
    entries
}

/// All registered worktrees; empty when git cannot list them.
pub fn list(vcs: &impl Vcs) -> Vec<WorktreeEntry> {
    let out = git::worktree_list(vcs);
    if !out.success {
        tracing::warn!(output = %out.output, "git worktree list failed");
        return Vec::new();
    }
    parse_porcelain(&out.output)
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BranchOutcome {
    Existing,
    Created { from: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WorktreeOutcome {
    /// The path was already on disk; nothing was asked of git.
    Existing,
    Created { branch: BranchOutcome },
}

/// Make sure `branch` exists, creating it from the first configured base
/// branch that git accepts. The remote is fetched first so a freshly pushed
/// base is visible.
pub fn ensure_branch(vcs: &impl Vcs, branch: &str, config: &Config) -> Result<BranchOutcome> {
    if git::branch_exists(vcs, branch, &config.remote) {
        return Ok(BranchOutcome::Existing);
    }

    let fetched = git::fetch(vcs, &config.remote);
    if !fetched.success {
        tracing::warn!(remote = %config.remote, output = %fetched.output, "fetch failed, branching from local refs");
    }

    let mut last_output = String::from("no base branches configured");
    for base in &config.base_branches {
        let out = git::create_branch(vcs, branch, base);
        if out.success {
            tracing::info!(branch, from = %base, "created branch");
            return Ok(BranchOutcome::Created { from: base.clone() });
        }
        last_output = out.output;
    }
    Err(FlowError::BranchCreate(last_output))
}

/// Make sure a worktree for `branch` exists at `path`.
///
/// An existing path short-circuits without touching git, which makes a fork
/// safe to re-run. Whether that directory really is a worktree of `branch`
/// is not checked.
pub fn ensure_worktree(
    vcs: &impl Vcs,
    path: &Path,
    branch: &str,
    config: &Config,
) -> Result<WorktreeOutcome> {
    if path.exists() {
        tracing::info!(path = %path.display(), "worktree already exists");
        return Ok(WorktreeOutcome::Existing);
    }

    let branch_outcome = ensure_branch(vcs, branch, config)?;

    let out = git::worktree_add(vcs, path, branch);
    if !out.success {
        return Err(FlowError::WorktreeCreate(out.output));
    }
    tracing::info!(path = %path.display(), branch, "created worktree");
    Ok(WorktreeOutcome::Created {
        branch: branch_outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::fake::FakeGit;
    use crate::git::GitOutput;
    use tempfile::TempDir;

    const PORCELAIN: &str = "\
worktree /work/app
HEAD 1111111111111111111111111111111111111111
branch refs/heads/main

worktree /work/app-FEAT-001-auth-backend
HEAD 2222222222222222222222222222222222222222
branch refs/heads/feature/001-auth

worktree /work/app-detached
HEAD 3333333333333333333333333333333333333333
detached
";

    #[test]
    fn parses_porcelain_records() {
        let entries = parse_porcelain(PORCELAIN);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].path, PathBuf::from("/work/app"));
        assert_eq!(entries[0].short_branch(), "main");
        assert_eq!(entries[1].short_branch(), "feature/001-auth");
        assert_eq!(
            entries[1].head.as_deref(),
            Some("2222222222222222222222222222222222222222")
        );
        assert_eq!(entries[2].branch, None);
        assert_eq!(entries[2].short_branch(), "unknown");
    }

    #[test]
    fn parses_bare_repository() {
        let entries = parse_porcelain("worktree /srv/app.git\nbare\n");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].bare);
    }

    #[test]
    fn records_without_blank_separator() {
        let entries = parse_porcelain("worktree /a\nbranch refs/heads/x\nworktree /b\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].path, PathBuf::from("/b"));
    }

    #[test]
    fn list_is_empty_when_git_fails() {
        assert!(list(&FakeGit::new()).is_empty());
    }

    #[test]
    fn existing_branch_is_left_alone() {
        let git = FakeGit::new().on(
            &["show-ref", "--verify", "refs/heads/feature/001-auth"],
            GitOutput::ok(""),
        );
        let outcome = ensure_branch(&git, "feature/001-auth", &Config::default()).unwrap();
        assert_eq!(outcome, BranchOutcome::Existing);
        assert!(!git.called(&["fetch"]));
        assert!(!git.called(&["branch"]));
    }

    #[test]
    fn branch_falls_back_to_master() {
        let git = FakeGit::new()
            .on(&["fetch"], GitOutput::ok(""))
            .on(&["branch", "feature/001-auth", "master"], GitOutput::ok(""));
        let outcome = ensure_branch(&git, "feature/001-auth", &Config::default()).unwrap();
        assert_eq!(
            outcome,
            BranchOutcome::Created {
                from: "master".to_string()
            }
        );
        assert!(git.called(&["fetch", "origin"]));
        assert!(git.called(&["branch", "feature/001-auth", "main"]));
    }

    #[test]
    fn branch_creation_failure_carries_git_output() {
        let git = FakeGit::new().on(
            &["branch"],
            GitOutput::failed("fatal: not a valid object name"),
        );
        let err = ensure_branch(&git, "feature/001-auth", &Config::default()).unwrap_err();
        assert!(matches!(err, FlowError::BranchCreate(ref m) if m.contains("not a valid object name")));
    }

    #[test]
    fn existing_path_skips_git_entirely() {
        let dir = TempDir::new().unwrap();
        let git = FakeGit::new();
        let outcome =
            ensure_worktree(&git, dir.path(), "feature/001-auth", &Config::default()).unwrap();
        assert_eq!(outcome, WorktreeOutcome::Existing);
        assert!(git.calls.borrow().is_empty());
    }

    #[test]
    fn worktree_add_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app-FEAT-001-auth-full");
        let git = FakeGit::new()
            .on(&["show-ref"], GitOutput::ok(""))
            .on(&["worktree", "add"], GitOutput::failed("fatal: already checked out"));
        let err = ensure_worktree(&git, &path, "feature/001-auth", &Config::default()).unwrap_err();
        assert!(matches!(err, FlowError::WorktreeCreate(_)));
    }
}
