use clap::Parser;
use featflow_cli::cmd::fork::{self, ForkOptions};
use featflow_cli::root::resolve_root;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fork-feature",
    about = "Fork a feature into an isolated git worktree for one development role",
    version
)]
struct Cli {
    /// Feature id, e.g. FEAT-001-auth
    feature: Option<String>,

    /// Role id (see --list-roles)
    role: Option<String>,

    /// Show available roles
    #[arg(long)]
    list_roles: bool,

    /// Show active worktrees
    #[arg(long)]
    list_worktrees: bool,

    /// Remove every worktree belonging to a feature
    #[arg(long, value_name = "FEAT-ID")]
    cleanup: Option<String>,

    /// Prepare the worktree and context but do not open a terminal
    #[arg(long, env = "FEATFLOW_NO_LAUNCH")]
    no_launch: bool,

    /// Repository root (default: auto-detect from git)
    #[arg(long, env = "FEATFLOW_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, short = 'j')]
    json: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    featflow_cli::init_logging();
    featflow_cli::finish(dispatch(cli));
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    if cli.list_roles {
        return fork::list_roles(cli.json);
    }

    let root = resolve_root(cli.root.as_deref());

    if cli.list_worktrees {
        return fork::list_worktrees(&root, cli.json);
    }
    if let Some(feature) = cli.cleanup.as_deref() {
        return fork::cleanup(&root, feature, cli.json);
    }

    let Some(feature) = cli.feature.as_deref() else {
        println!("{}", fork::USAGE);
        std::process::exit(1);
    };
    let Some(role) = cli.role.as_deref() else {
        anyhow::bail!("role is required (see --list-roles)");
    };

    let opts = ForkOptions {
        json: cli.json,
        launch: !cli.no_launch,
    };
    fork::run(&root, feature, &role.to_lowercase(), &opts)
}
