//! Fixed catalogue of fork roles.
//!
//! A role narrows what a fork is expected to touch: which section of
//! `tasks.md` it works through and which files it may and may not modify.

use crate::error::{FlowError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: &'static str,
    pub name: &'static str,
    pub focus: &'static str,
    pub tasks_section: &'static str,
    pub files_pattern: &'static str,
    pub do_not_touch: &'static str,
}

pub const ROLES: &[Role] = &[
    Role {
        id: "backend",
        name: "Backend Developer",
        focus: "Python backend: FastAPI routes, SQLAlchemy models, services, business logic",
        tasks_section: "Backend",
        files_pattern: "src/api/, src/models/, src/services/, src/utils/",
        do_not_touch: "Frontend components, UI files, React/Gradio code",
    },
    Role {
        id: "frontend",
        name: "Frontend Developer",
        focus: "UI code: React components, Gradio interfaces, styling, user interactions",
        tasks_section: "Frontend",
        files_pattern: "src/components/, src/ui/, src/pages/, static/",
        do_not_touch: "Backend API code, database models, services",
    },
    Role {
        id: "data",
        name: "Data Engineer",
        focus: "Data pipelines, ML models, preprocessing, transformations",
        tasks_section: "Data",
        files_pattern: "src/data/, src/ml/, src/pipelines/",
        do_not_touch: "API endpoints, UI components",
    },
    Role {
        id: "tests",
        name: "Test Engineer",
        focus: "Unit tests, integration tests, e2e tests, test fixtures",
        tasks_section: "Tests",
        files_pattern: "tests/",
        do_not_touch: "Production code (only read it to understand what to test)",
    },
    Role {
        id: "docs",
        name: "Documentation Specialist",
        focus: "README, docstrings, API documentation, user guides",
        tasks_section: "Documentation",
        files_pattern: "docs/, README.md, *.md",
        do_not_touch: "Production code (only read it to document)",
    },
    Role {
        id: "full",
        name: "Full Stack Developer",
        focus: "All tasks in order as defined in tasks.md",
        tasks_section: "ALL",
        files_pattern: "src/, tests/",
        do_not_touch: "Nothing - you handle everything",
    },
];

/// Look up a role by id, ignoring ASCII case.
pub fn find(id: &str) -> Option<&'static Role> {
    ROLES.iter().find(|r| r.id.eq_ignore_ascii_case(id))
}

pub fn lookup(id: &str) -> Result<&'static Role> {
    find(id).ok_or_else(|| FlowError::UnknownRole(id.to_string()))
}

impl Role {
    /// Focus line shortened for list output.
    pub fn focus_summary(&self, max_chars: usize) -> String {
        let short: String = self.focus.chars().take(max_chars).collect();
        format!("{short}...")
    }
}
