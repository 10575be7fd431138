use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("feature not found: {0}")]
    FeatureNotFound(String),

    #[error("invalid feature id '{0}': must be a single path component")]
    InvalidFeatureId(String),

    #[error("failed to create branch: {0}")]
    BranchCreate(String),

    #[error("failed to create worktree: {0}")]
    WorktreeCreate(String),

    #[error("failed to launch terminal: {0}")]
    Launch(String),

    #[error("no terminal emulator found on PATH (tried: {0})")]
    NoTerminal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, FlowError>;
