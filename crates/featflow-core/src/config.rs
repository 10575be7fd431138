use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// AssistantConfig
// ---------------------------------------------------------------------------

/// The AI assistant started inside a freshly forked worktree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_assistant_command")]
    pub command: String,
    #[serde(default = "default_assistant_args")]
    pub args: Vec<String>,
}

fn default_assistant_command() -> String {
    "claude".to_string()
}

fn default_assistant_args() -> Vec<String> {
    vec!["--dangerously-skip-permissions".to_string()]
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            command: default_assistant_command(),
            args: default_assistant_args(),
        }
    }
}

impl AssistantConfig {
    /// Command line as typed into a shell.
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Remote consulted for existing branches and fetched before branching.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branches tried in order as the starting point of a new feature branch.
    #[serde(default = "default_base_branches")]
    pub base_branches: Vec<String>,

    /// Documentation tree holding one directory per feature id.
    #[serde(default = "default_features_dir")]
    pub features_dir: String,

    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Custom terminal argv. `{dir}`, `{title}` and `{command}` are
    /// substituted in every element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<Vec<String>>,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_base_branches() -> Vec<String> {
    vec!["main".to_string(), "master".to_string()]
}

fn default_features_dir() -> String {
    paths::DEFAULT_FEATURES_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            base_branches: default_base_branches(),
            features_dir: default_features_dir(),
            assistant: AssistantConfig::default(),
            terminal: None,
        }
    }
}

impl Config {
    /// Load `.featflow/config.yaml` under `root`, or defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.remote, "origin");
        assert_eq!(cfg.base_branches, ["main", "master"]);
        assert_eq!(cfg.features_dir, "docs/features");
        assert_eq!(
            cfg.assistant.command_line(),
            "claude --dangerously-skip-permissions"
        );
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(paths::FEATFLOW_DIR)).unwrap();
        std::fs::write(
            paths::config_path(dir.path()),
            "remote: upstream\nbase_branches: [develop]\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.remote, "upstream");
        assert_eq!(cfg.base_branches, ["develop"]);
        assert_eq!(cfg.features_dir, "docs/features");
        assert_eq!(cfg.assistant, AssistantConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(paths::FEATFLOW_DIR)).unwrap();
        std::fs::write(paths::config_path(dir.path()), "remote: [unclosed\n").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn terminal_template_and_assistant_load() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(paths::FEATFLOW_DIR)).unwrap();
        std::fs::write(
            paths::config_path(dir.path()),
            "assistant:\n  command: aider\n  args: []\nterminal: [wezterm, start, \"--cwd\", \"{dir}\", \"{command}\"]\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.assistant.command_line(), "aider");
        assert_eq!(
            cfg.terminal.as_deref(),
            Some(&["wezterm", "start", "--cwd", "{dir}", "{command}"].map(String::from)[..])
        );
    }
}
