//! Project scaffold: a fixed directory list and a fixed catalogue of
//! rendered documents, written once into a base directory.
//!
//! Directories are created idempotently; files are always overwritten.

pub mod templates;

use crate::error::Result;
use crate::io;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

pub const DEFAULT_STACK: &str = "Python, FastAPI, PostgreSQL, Docker";
pub const DEFAULT_TASK_COUNT: u32 = 15;

pub const DIRECTORIES: &[&str] = &[
    ".claude/commands",
    ".claude/skills/project-init/tools",
    "docs/architecture",
    "docs/features/_template",
    "docs/sprints",
    "docs/decisions",
    "src",
    "tests",
];

/// (relative path, template). An empty template produces an empty file.
pub const FILES: &[(&str, &str)] = &[
    ("CLAUDE.md", templates::CLAUDE_MD),
    ("README.md", templates::README_MD),
    ("docs/project.md", templates::PROJECT_MD),
    ("docs/feature_cycle.md", templates::FEATURE_CYCLE_MD),
    ("docs/features/_index.md", templates::FEATURES_INDEX_MD),
    ("docs/features/_template/spec.md", templates::FEATURE_SPEC_MD),
    ("docs/features/_template/design.md", templates::FEATURE_DESIGN_MD),
    ("docs/features/_template/tasks.md", templates::FEATURE_TASKS_MD),
    ("docs/features/_template/tests.md", templates::FEATURE_TESTS_MD),
    ("docs/features/_template/status.md", templates::FEATURE_STATUS_MD),
    ("docs/architecture/_index.md", templates::ARCHITECTURE_INDEX_MD),
    ("docs/sprints/_index.md", templates::SPRINTS_INDEX_MD),
    ("docs/decisions/_index.md", templates::DECISIONS_INDEX_MD),
    (".claude/commands/new-feature.md", templates::NEW_FEATURE_COMMAND),
    (".claude/commands/interview.md", templates::INTERVIEW_COMMAND),
    (".claude/commands/plan.md", templates::PLAN_COMMAND),
    (".claude/commands/implement.md", templates::IMPLEMENT_COMMAND),
    (".claude/settings.json", templates::SETTINGS_JSON),
    ("src/.gitkeep", ""),
    ("tests/.gitkeep", ""),
];

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    pub description: String,
    pub stack: String,
}

impl ProjectInfo {
    /// Blank description and stack fall back to defaults.
    pub fn new(name: &str, description: &str, stack: &str) -> Self {
        let name = name.trim().to_string();
        let description = match description.trim() {
            "" => format!("{name} - A new project"),
            d => d.to_string(),
        };
        let stack = match stack.trim() {
            "" => DEFAULT_STACK.to_string(),
            s => s.to_string(),
        };
        Self {
            name,
            description,
            stack,
        }
    }
}

/// Values substituted into every template.
#[derive(Debug, Clone)]
pub struct TemplateVars<'a> {
    pub project_name: &'a str,
    pub description: &'a str,
    pub stack: &'a str,
    pub date: String,
    pub total: String,
}

impl<'a> TemplateVars<'a> {
    pub fn new(info: &'a ProjectInfo, date: NaiveDate) -> Self {
        Self {
            project_name: &info.name,
            description: &info.description,
            stack: &info.stack,
            date: date.format("%Y-%m-%d").to_string(),
            total: DEFAULT_TASK_COUNT.to_string(),
        }
    }
}

impl TemplateVars<'_> {
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "project_name" => Some(self.project_name),
            "description" => Some(self.description),
            "stack" => Some(self.stack),
            "date" => Some(self.date.as_str()),
            "total" => Some(self.total.as_str()),
            _ => None,
        }
    }
}

/// Substitute the named placeholders in one pass. Unknown `{...}` text is
/// left alone and substituted values are never expanded again.
pub fn render(template: &str, vars: &TemplateVars<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after
            .find('}')
            .and_then(|close| vars.lookup(&after[..close]).map(|v| (v, close)));
        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize)]
pub struct StructureReport {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

/// Create the scaffold under `base`. Not transactional: an I/O error stops
/// the batch where it happened.
pub fn create_structure(base: &Path, info: &ProjectInfo, date: NaiveDate) -> Result<StructureReport> {
    let vars = TemplateVars::new(info, date);
    let mut report = StructureReport::default();

    for dir in DIRECTORIES {
        io::ensure_dir(&base.join(dir))?;
        report.directories.push(dir.to_string());
    }

    for (rel, template) in FILES {
        let content = render(template, &vars);
        io::atomic_write(&base.join(rel), content.as_bytes())?;
        report.files.push(rel.to_string());
    }

    tracing::info!(
        base = %base.display(),
        directories = report.directories.len(),
        files = report.files.len(),
        "scaffold written"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn blank_inputs_get_defaults() {
        let info = ProjectInfo::new("Atlas", "  ", "");
        assert_eq!(info.description, "Atlas - A new project");
        assert_eq!(info.stack, "Python, FastAPI, PostgreSQL, Docker");
    }

    #[test]
    fn explicit_inputs_are_kept() {
        let info = ProjectInfo::new("Atlas", "Maps for teams", "Rust, Axum");
        assert_eq!(info.description, "Maps for teams");
        assert_eq!(info.stack, "Rust, Axum");
    }

    #[test]
    fn render_leaves_unknown_braces() {
        let info = ProjectInfo::new("Atlas", "", "");
        let vars = TemplateVars::new(&info, date(18));
        let out = render("{project_name} {ID}-{name} {date} 0/{total}", &vars);
        assert_eq!(out, "Atlas {ID}-{name} 2026-10-18 0/15");
    }

    #[test]
    fn substituted_values_are_not_expanded_again() {
        let info = ProjectInfo::new("Atlas {description}", "Templating with {stack} and {date}", "Rust");
        let vars = TemplateVars::new(&info, date(18));
        assert_eq!(
            render("{description}", &vars),
            "Templating with {stack} and {date}"
        );
        assert_eq!(
            render("# {project_name} ({stack})", &vars),
            "# Atlas {description} (Rust)"
        );
    }

    #[test]
    fn render_handles_nested_and_unclosed_braces() {
        let info = ProjectInfo::new("Atlas", "", "");
        let vars = TemplateVars::new(&info, date(18));
        assert_eq!(render("{{date}} {\"a\": 1} {total", &vars), "{2026-10-18} {\"a\": 1} {total");
    }

    #[test]
    fn settings_json_stays_valid_json() {
        let info = ProjectInfo::new("Atlas", "", "");
        let vars = TemplateVars::new(&info, date(18));
        let rendered = render(templates::SETTINGS_JSON, &vars);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(value["permissions"]["deny"].is_array());
    }

    #[test]
    fn creates_every_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let info = ProjectInfo::new("Atlas", "Maps for teams", "");
        let report = create_structure(dir.path(), &info, date(18)).unwrap();

        assert_eq!(report.directories.len(), 8);
        assert_eq!(report.files.len(), 20);
        for d in DIRECTORIES {
            assert!(dir.path().join(d).is_dir(), "missing dir {d}");
        }
        for (f, _) in FILES {
            assert!(dir.path().join(f).is_file(), "missing file {f}");
        }

        let claude = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
        assert!(claude.contains("Atlas - Maps for teams"));
        assert!(claude.contains("Stack: Python, FastAPI, PostgreSQL, Docker"));
        let tasks =
            std::fs::read_to_string(dir.path().join("docs/features/_template/tasks.md")).unwrap();
        assert!(tasks.contains("*Progress: 0/15 tasks*"));
    }

    #[test]
    fn keep_files_are_empty() {
        let dir = TempDir::new().unwrap();
        create_structure(dir.path(), &ProjectInfo::new("Atlas", "", ""), date(18)).unwrap();
        assert_eq!(std::fs::read(dir.path().join("src/.gitkeep")).unwrap().len(), 0);
        assert_eq!(std::fs::read(dir.path().join("tests/.gitkeep")).unwrap().len(), 0);
    }

    #[test]
    fn rerun_is_idempotent_on_dirs_and_overwrites_files() {
        let dir = TempDir::new().unwrap();
        let info = ProjectInfo::new("Atlas", "", "");
        create_structure(dir.path(), &info, date(1)).unwrap();
        std::fs::write(dir.path().join("README.md"), "hand edited").unwrap();

        create_structure(dir.path(), &info, date(18)).unwrap();

        let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(readme.starts_with("# Atlas"));
        assert!(readme.contains("Created: 2026-10-18"));
        assert!(!readme.contains("2026-10-01"));
    }
}
