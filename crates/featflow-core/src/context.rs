//! Assembles the brief handed to the assistant running inside a fork.

use crate::error::Result;
use crate::io;
use crate::paths;
use crate::role::Role;
use std::path::Path;

/// The four documents of one feature, read verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDocs {
    pub spec: String,
    pub design: String,
    pub tasks: String,
    pub status: String,
}

impl FeatureDocs {
    /// Read the documents from `feature_dir`. Missing files become
    /// `[File not found: <path>]` so the brief always has every section.
    pub fn load(feature_dir: &Path) -> Result<Self> {
        Ok(Self {
            spec: io::read_or_placeholder(&feature_dir.join(paths::SPEC_MD))?,
            design: io::read_or_placeholder(&feature_dir.join(paths::DESIGN_MD))?,
            tasks: io::read_or_placeholder(&feature_dir.join(paths::TASKS_MD))?,
            status: io::read_or_placeholder(&feature_dir.join(paths::STATUS_MD))?,
        })
    }
}

#[derive(Clone, Copy)]
pub struct ContextInput<'a> {
    pub feature_id: &'a str,
    pub role: &'a Role,
    pub branch: &'a str,
    pub worktree: &'a Path,
    /// Pre-formatted start time, `%Y-%m-%d %H:%M`.
    pub started: &'a str,
    pub docs: &'a FeatureDocs,
}

const RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════════";

fn section(title: &str) -> String {
    format!("{RULE}\n{title}\n{RULE}")
}

pub fn build_context(input: &ContextInput<'_>) -> String {
    let ContextInput {
        feature_id,
        role,
        branch,
        worktree,
        started,
        docs,
    } = *input;
    let worktree = worktree.display();
    let tasks_section = role.tasks_section;

    let mut out = String::new();

    out.push_str(&format!(
        r#"
╔═══════════════════════════════════════════════════════════════════════════════╗
║                     ISOLATED FEATURE DEVELOPMENT CONTEXT                      ║
╠═══════════════════════════════════════════════════════════════════════════════╣
║  Feature: {feature_id}
║  Role: {role_name}
║  Branch: {branch}
║  Worktree: {worktree}
║  Started: {started}
╚═══════════════════════════════════════════════════════════════════════════════╝

{isolation}

This is a separate copy of the repository. You can work freely without
affecting other developers or features.

WORKTREE PATH: {worktree}
BRANCH: {branch}

Your changes will be merged to main via Pull Request after completion.

"#,
        role_name = role.name,
        isolation = section("⚠️  IMPORTANT: YOU ARE IN AN ISOLATED WORKTREE"),
    ));

    out.push_str(&format!(
        r#"{header}

You are the **{name}** for feature {feature_id}.

YOUR FOCUS:
{focus}

TASKS SECTION TO WORK ON:
{tasks_section} section in tasks.md

FILES YOU SHOULD MODIFY:
{files}

DO NOT TOUCH:
{avoid}

"#,
        header = section("YOUR ROLE AND RESPONSIBILITIES"),
        name = role.name,
        focus = role.focus,
        files = role.files_pattern,
        avoid = role.do_not_touch,
    ));

    out.push_str(&format!(
        r#"{header}

You are on branch: {branch}

COMMIT WORKFLOW (per task):
1. Stage: git add [files for this task only]
2. Commit: git commit -m "{feature_id}: [Action] [Component] - [description]"
3. Continue to next task...

COMMIT MESSAGE FORMAT:
- Keep under 72 characters
- Start with feature ID: "{feature_id}: "
- Use present tense ("Add" not "Added")
- Be specific: "Add User model" not "Update files"

PUSH SCHEDULE:
- After every 3 tasks OR every 30 minutes
- Command: git push origin {branch}

WHEN ALL TASKS COMPLETE:
1. Final push: git push -u origin {branch}
2. Create PR: gh pr create --title "{feature_id}: [Feature Name]" --base main
3. Or manual: https://github.com/[user]/[repo]/compare/{branch}

IF CONFLICTS OCCUR:
1. Run: git status (see conflicting files)
2. Read each conflicting file
3. Ask user which version to keep
4. Resolve and: git add [file] && git rebase --continue

DO NOT:
- Commit unrelated files
- Use generic messages like "update" or "fix"
- Push to main directly
- Merge from main without asking

"#,
        header = section("GIT WORKFLOW"),
    ));

    out.push_str(&format!(
        r#"{header}

1. BEFORE starting each task:
   - Update tasks.md: Change "- [ ] Task" to "- [🟡] Task"

2. AFTER completing each task:
   - Update tasks.md: Change "- [🟡] Task" to "- [x] Task"
   - Commit: git add . && git commit -m "{feature_id}: Complete Task N"

3. EVERY 30 MINUTES or 3 TASKS:
   - Update status.md with progress
   - git push origin {branch}

4. IF YOU HIT A BLOCKER:
   - Update tasks.md: Change to "- [🔴] Task (blocked: reason)"
   - Update status.md Blockers section
   - Continue with other tasks if possible

"#,
        header = section("LIVE DOCUMENTATION - UPDATE IN REAL TIME"),
    ));

    for (title, body) in [
        ("FEATURE SPECIFICATION (spec.md)".to_string(), &docs.spec),
        ("TECHNICAL DESIGN (design.md)".to_string(), &docs.design),
        (
            format!("TASKS - WORK ON \"{tasks_section}\" SECTION (tasks.md)"),
            &docs.tasks,
        ),
        ("CURRENT STATUS (status.md)".to_string(), &docs.status),
    ] {
        out.push_str(&section(&title));
        out.push_str("\n\n");
        out.push_str(body);
        out.push_str("\n\n");
    }

    out.push_str(&format!(
        r#"{header}

1. Verify you are in the correct worktree:
   pwd  # Should show: {worktree}

2. Verify you are on the correct branch:
   git branch --show-current  # Should show: {branch}

3. Find the first uncompleted task in YOUR SECTION ({tasks_section})

4. Mark it as in-progress in tasks.md

5. Start implementing

BEGIN WORKING NOW. Ask questions only if something is unclear or blocking.
"#,
        header = section("YOUR FIRST ACTIONS"),
    ));

    out
}
