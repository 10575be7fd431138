pub mod branch;
pub mod config;
pub mod context;
pub mod error;
pub mod fork;
pub mod git;
pub mod io;
pub mod launch;
pub mod paths;
pub mod role;
pub mod scaffold;
pub mod worktree;

pub use error::{FlowError, Result};
