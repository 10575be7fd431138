use crate::error::{FlowError, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const FEATFLOW_DIR: &str = ".featflow";
pub const CONFIG_FILE: &str = ".featflow/config.yaml";

pub const DEFAULT_FEATURES_DIR: &str = "docs/features";
pub const CONTEXTS_DIR: &str = ".claude/contexts";

pub const SPEC_MD: &str = "spec.md";
pub const DESIGN_MD: &str = "design.md";
pub const TASKS_MD: &str = "tasks.md";
pub const STATUS_MD: &str = "status.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn feature_dir(root: &Path, features_dir: &str, feature_id: &str) -> PathBuf {
    root.join(features_dir).join(feature_id)
}

/// Sibling directory of the repository that hosts the worktree for one
/// (feature, role) pair: `<parent>/<repo-name>-<feature>-<role>`.
pub fn worktree_path(repo_root: &Path, feature_id: &str, role_id: &str) -> PathBuf {
    let repo_name = repo_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "repo".to_string());
    let parent = repo_root.parent().unwrap_or(repo_root);
    parent.join(format!("{repo_name}-{feature_id}-{role_id}"))
}

pub fn context_relative_path(role_id: &str) -> String {
    format!("{CONTEXTS_DIR}/CONTEXT_{}.md", role_id.to_uppercase())
}

pub fn context_file(worktree: &Path, role_id: &str) -> PathBuf {
    worktree.join(context_relative_path(role_id))
}

// ---------------------------------------------------------------------------
// Feature id validation
// ---------------------------------------------------------------------------

/// Reject feature ids that could escape the features directory.
pub fn validate_feature_id(feature_id: &str) -> Result<()> {
    if feature_id.is_empty()
        || feature_id.contains('/')
        || feature_id.contains('\\')
        || feature_id.contains("..")
        || feature_id.contains('\0')
    {
        return Err(FlowError::InvalidFeatureId(feature_id.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
