use clap::Parser;
use featflow_cli::cmd::structure;
use featflow_core::scaffold::ProjectInfo;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "create-structure",
    about = "Scaffold a project for documentation-driven feature development",
    version
)]
struct Cli {
    /// Project name (prompted for when omitted)
    project: Option<String>,

    /// One-line project description
    description: Option<String>,

    /// Technology stack
    stack: Option<String>,

    /// Directory to scaffold into (default: current directory)
    #[arg(long)]
    dir: Option<PathBuf>,

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
    let base = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let info = match cli.project.as_deref() {
        Some(name) if !name.trim().is_empty() => ProjectInfo::new(
            name,
            cli.description.as_deref().unwrap_or(""),
            cli.stack.as_deref().unwrap_or(""),
        ),
        _ => {
            println!("Usage: create-structure [PROJECT] [DESCRIPTION] [STACK]\n");
            let stdin = std::io::stdin();
            let prompted =
                structure::prompt_project(&mut stdin.lock(), &mut std::io::stdout())?;
            match prompted {
                Some(info) => info,
                None => {
                    eprintln!("Project name is required");
                    return Ok(());
                }
            }
        }
    };

    structure::run(&base, &info, cli.json)
}
