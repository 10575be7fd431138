use crate::output::{print_json, print_table};
use anyhow::Context;
use featflow_core::{
    config::Config,
    fork::{self, ForkReport},
    git::Git,
    role::ROLES,
    worktree::{self, BranchOutcome, WorktreeOutcome},
    FlowError,
};
use std::path::Path;

pub const USAGE: &str = "\
fork-feature - isolated parallel development with git worktrees

Usage:
    fork-feature <FEAT-ID> <role>      Create isolated fork
    fork-feature --list-roles          Show available roles
    fork-feature --list-worktrees      Show active worktrees
    fork-feature --cleanup <FEAT-ID>   Remove feature worktrees

Examples:
    fork-feature FEAT-001-auth full
    fork-feature FEAT-001-auth backend
    fork-feature --cleanup FEAT-001-auth

Worktree layout:
    project/                           <- main repository
    project-FEAT-001-auth-full/        <- isolated worktree for the feature
    project-FEAT-002-dashboard-full/   <- another isolated worktree";

pub struct ForkOptions {
    pub json: bool,
    pub launch: bool,
}

// ---------------------------------------------------------------------------
// --list-roles
// ---------------------------------------------------------------------------

pub fn list_roles(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&ROLES);
    }

    println!("Available roles:\n");
    for role in ROLES {
        println!("  {:12} {}", role.id, role.name);
        println!("  {:12} Focus: {}", "", role.focus_summary(50));
        println!();
    }
    println!("Usage: fork-feature <FEAT-ID> <role>");
    println!("Example: fork-feature FEAT-001-auth backend");
    Ok(())
}

// ---------------------------------------------------------------------------
// --list-worktrees
// ---------------------------------------------------------------------------

pub fn list_worktrees(root: &Path, json: bool) -> anyhow::Result<()> {
    let entries = worktree::list(&Git::in_dir(root));

    if json {
        return print_json(&entries);
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| vec![e.path.display().to_string(), e.short_branch().to_string()])
        .collect();
    print_table(&["PATH", "BRANCH"], &rows);
    println!("\nTotal: {} worktrees", entries.len());
    Ok(())
}

// ---------------------------------------------------------------------------
// --cleanup
// ---------------------------------------------------------------------------

pub fn cleanup(root: &Path, feature_id: &str, json: bool) -> anyhow::Result<()> {
    let report = fork::cleanup(&Git::in_dir(root), root, feature_id)
        .with_context(|| format!("cannot clean up worktrees for '{feature_id}'"))?;

    if json {
        return print_json(&report);
    }

    println!("Cleaning up worktrees for {feature_id}...");
    for removal in &report.removals {
        println!("  removing: {}", removal.path.display());
        if removal.removed {
            println!("    removed");
        } else {
            println!("    failed: {}", removal.message);
        }
    }
    println!("\nRemoved {} worktrees", report.removed);
    Ok(())
}

// ---------------------------------------------------------------------------
// <FEAT-ID> <role>
// ---------------------------------------------------------------------------

pub fn run(root: &Path, feature_id: &str, role_id: &str, opts: &ForkOptions) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load .featflow/config.yaml")?;

    let plan = match fork::plan(root, feature_id, role_id, &config) {
        Ok(plan) => plan,
        Err(e @ FlowError::UnknownRole(_)) => {
            if !opts.json {
                list_roles(false)?;
            }
            return Err(e.into());
        }
        Err(e @ FlowError::FeatureNotFound(_)) => {
            anyhow::bail!("{e}\n  create it first with: /new-feature {feature_id}");
        }
        Err(e) => return Err(e.into()),
    };

    if !opts.json {
        println!("Forking {} as {}...", plan.feature_id, plan.role.name);
    }

    let git = Git::in_dir(root);
    let now = chrono::Local::now().naive_local();
    let report = fork::prepare(&git, &plan, &config, now)
        .with_context(|| format!("cannot prepare worktree for '{feature_id}'"))?;

    if !opts.launch {
        return finish(&report, &config, None, opts.json);
    }

    let launched = fork::launch_assistant(&config, &report).with_context(|| {
        format!(
            "worktree and context are in place; start the assistant manually: cd {} && {}",
            report.worktree.display(),
            config.assistant.command_line()
        )
    })?;
    finish(&report, &config, Some(&launched.program), opts.json)
}

fn finish(
    report: &ForkReport,
    config: &Config,
    terminal: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        return print_json(&serde_json::json!({
            "fork": report,
            "terminal": terminal,
        }));
    }

    match &report.worktree_status {
        WorktreeOutcome::Existing => println!("  exists:  {}", report.worktree.display()),
        WorktreeOutcome::Created { branch } => {
            if let BranchOutcome::Created { from } = branch {
                println!("  created: branch {} from {from}", report.branch);
            }
            println!("  created: {}", report.worktree.display());
        }
    }
    println!("\nFork ready");
    println!("  worktree: {}", report.worktree.display());
    println!("  branch:   {}", report.branch);
    println!("  context:  {}", report.context_file.display());

    match terminal {
        Some(program) => println!("\nLaunched {program}. In the new terminal, paste:"),
        None => println!(
            "\nStart the assistant with: cd {} && {}\nThen paste:",
            report.worktree.display(),
            config.assistant.command_line()
        ),
    }
    println!(
        "  \"Read {} and follow the instructions\"",
        report.context_relative_path()
    );

    println!("\nWhen done:");
    println!("  1. git push -u {} {}", config.remote, report.branch);
    println!("  2. Create a PR to main");
    println!("  3. After merge: fork-feature --cleanup {}", report.feature_id);
    Ok(())
}
