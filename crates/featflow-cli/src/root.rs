use featflow_core::git::{self, Git};
use std::path::{Path, PathBuf};

/// Resolve the repository root.
///
/// Priority:
/// 1. `--root` flag / `FEATFLOW_ROOT` env var (passed in as `explicit`)
/// 2. `git rev-parse --show-toplevel` from the current directory
/// 3. Walk upward from `cwd` looking for `.git`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    if let Some(top) = git::toplevel(&Git::new()) {
        return top;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_git_ancestor(&cwd).unwrap_or(cwd)
}

/// Nearest ancestor of `start` (inclusive) containing `.git`, which may be
/// a directory or, inside a worktree, a file.
fn find_git_ancestor(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn finds_git_dir_above() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let deep = dir.path().join("src/deep");
        std::fs::create_dir_all(&deep).unwrap();
        assert_eq!(find_git_ancestor(&deep), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn worktree_git_file_counts() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".git"), "gitdir: /elsewhere\n").unwrap();
        assert_eq!(find_git_ancestor(dir.path()), Some(dir.path().to_path_buf()));
    }
}
