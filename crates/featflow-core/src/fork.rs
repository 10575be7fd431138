//! Fork orchestration: validate, prepare the worktree and brief, launch.
//!
//! Steps are not transactional. A failure after the branch or worktree has
//! been created leaves them in place; re-running is safe because both are
//! existence-checked first.

use crate::branch::branch_name;
use crate::config::Config;
use crate::context::{build_context, ContextInput, FeatureDocs};
use crate::error::{FlowError, Result};
use crate::git::{self, Vcs};
use crate::io;
use crate::launch::{self, LaunchRequest, TerminalCommand};
use crate::paths;
use crate::role::{self, Role, ROLES};
use crate::worktree::{self, WorktreeOutcome};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Planning
// ---------------------------------------------------------------------------

/// Everything derived from (repo root, feature id, role) before git is touched.
#[derive(Debug, Clone)]
pub struct ForkPlan {
    pub feature_id: String,
    pub role: &'static Role,
    pub branch: String,
    pub worktree: PathBuf,
    /// Feature documentation directory in the main repository.
    pub feature_dir: PathBuf,
}

/// Validate the role and feature and derive branch and worktree location.
pub fn plan(root: &Path, feature_id: &str, role_id: &str, config: &Config) -> Result<ForkPlan> {
    let role = role::lookup(role_id)?;
    paths::validate_feature_id(feature_id)?;

    let feature_dir = paths::feature_dir(root, &config.features_dir, feature_id);
    if !feature_dir.is_dir() {
        return Err(FlowError::FeatureNotFound(
            feature_dir.display().to_string(),
        ));
    }

    Ok(ForkPlan {
        feature_id: feature_id.to_string(),
        role,
        branch: branch_name(feature_id),
        worktree: paths::worktree_path(root, feature_id, role.id),
        feature_dir,
    })
}

// ---------------------------------------------------------------------------
// Preparation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ForkReport {
    pub feature_id: String,
    pub role: String,
    pub role_name: String,
    pub branch: String,
    /// Branch checked out in the main repository when the worktree was
    /// created. Not queried when the worktree already existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_branch: Option<String>,
    pub worktree: PathBuf,
    pub worktree_status: WorktreeOutcome,
    pub context_file: PathBuf,
}

impl ForkReport {
    pub fn context_relative_path(&self) -> String {
        paths::context_relative_path(&self.role)
    }
}

/// Ensure branch and worktree exist, then write the role brief into the
/// worktree. `now` stamps the brief.
pub fn prepare(
    vcs: &impl Vcs,
    plan: &ForkPlan,
    config: &Config,
    now: NaiveDateTime,
) -> Result<ForkReport> {
    let worktree_status =
        worktree::ensure_worktree(vcs, &plan.worktree, &plan.branch, config)?;
    let source_branch = match worktree_status {
        WorktreeOutcome::Existing => None,
        WorktreeOutcome::Created { .. } => Some(git::current_branch(vcs)),
    };

    // Prefer the branch's copy of the docs; fall back to the main checkout
    // when the feature directory is not committed yet.
    let in_worktree = paths::feature_dir(&plan.worktree, &config.features_dir, &plan.feature_id);
    let docs_dir = if in_worktree.is_dir() {
        in_worktree
    } else {
        tracing::debug!(dir = %plan.feature_dir.display(), "feature docs not in worktree, reading main checkout");
        plan.feature_dir.clone()
    };
    let docs = FeatureDocs::load(&docs_dir)?;

    let started = now.format("%Y-%m-%d %H:%M").to_string();
    let text = build_context(&ContextInput {
        feature_id: &plan.feature_id,
        role: plan.role,
        branch: &plan.branch,
        worktree: &plan.worktree,
        started: &started,
        docs: &docs,
    });

    let context_file = paths::context_file(&plan.worktree, plan.role.id);
    io::atomic_write(&context_file, text.as_bytes())?;
    tracing::info!(path = %context_file.display(), "wrote context");

    Ok(ForkReport {
        feature_id: plan.feature_id.clone(),
        role: plan.role.id.to_string(),
        role_name: plan.role.name.to_string(),
        branch: plan.branch.clone(),
        source_branch,
        worktree: plan.worktree.clone(),
        worktree_status,
        context_file,
    })
}

/// Open a terminal in the fork's worktree running the configured assistant.
pub fn launch_assistant(config: &Config, report: &ForkReport) -> Result<TerminalCommand> {
    let title = format!("{} - {}", report.feature_id, report.role);
    launch::launch(
        config,
        &LaunchRequest {
            dir: &report.worktree,
            title: &title,
            assistant: &config.assistant,
        },
    )
}

// ---------------------------------------------------------------------------
// Cleanup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Removal {
    pub role: String,
    pub path: PathBuf,
    pub removed: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanupReport {
    pub feature_id: String,
    pub removals: Vec<Removal>,
    pub removed: usize,
}

/// Force-remove every role's worktree for `feature_id` that exists on disk.
/// Individual failures are recorded, never propagated.
pub fn cleanup(vcs: &impl Vcs, root: &Path, feature_id: &str) -> Result<CleanupReport> {
    paths::validate_feature_id(feature_id)?;

    let mut removals = Vec::new();
    for role in ROLES {
        let path = paths::worktree_path(root, feature_id, role.id);
        if !path.exists() {
            continue;
        }
        let out = git::worktree_remove(vcs, &path);
        if !out.success {
            tracing::warn!(path = %path.display(), output = %out.output, "worktree removal failed");
        }
        removals.push(Removal {
            role: role.id.to_string(),
            path,
            removed: out.success,
            message: if out.success { String::new() } else { out.output },
        });
    }

    let removed = removals.iter().filter(|r| r.removed).count();
    Ok(CleanupReport {
        feature_id: feature_id.to_string(),
        removals,
        removed,
    })
}
