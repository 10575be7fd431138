use crate::output::print_json;
use anyhow::Context;
use featflow_core::scaffold::{self, ProjectInfo};
use std::io::{BufRead, Write};
use std::path::Path;

pub fn run(base: &Path, info: &ProjectInfo, json: bool) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    let report = scaffold::create_structure(base, info, today)
        .with_context(|| format!("failed to create project structure in {}", base.display()))?;

    if json {
        return print_json(&serde_json::json!({
            "project": info,
            "base": base,
            "directories": report.directories,
            "files": report.files,
        }));
    }

    for dir in &report.directories {
        println!("  created: {dir}/");
    }
    for file in &report.files {
        println!("  created: {file}");
    }

    println!("\nProject structure created successfully.");
    println!(
        "  Total: {} directories, {} files",
        report.directories.len(),
        report.files.len()
    );
    println!("\nNext steps:");
    println!("  1. Edit docs/project.md to define your project");
    println!("  2. Run: /new-feature FEAT-001-name");
    println!("  3. Follow docs/feature_cycle.md");
    Ok(())
}

/// Ask for the project fields on `input`, one line each. Returns `None`
/// when the name is left blank.
pub fn prompt_project(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<Option<ProjectInfo>> {
    let mut ask = |label: &str| -> anyhow::Result<String> {
        write!(output, "{label}")?;
        output.flush()?;
        let mut line = String::new();
        input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        Ok(line.trim().to_string())
    };

    let name = ask("Project name: ")?;
    let description = ask("Description (optional): ")?;
    let stack = ask(&format!("Stack (optional, default: {}): ", scaffold::DEFAULT_STACK))?;

    if name.is_empty() {
        return Ok(None);
    }
    Ok(Some(ProjectInfo::new(&name, &description, &stack)))
}
