// Project scaffold templates. Placeholders: {project_name}, {description},
// {stack}, {date}, {total}. Any other brace text is emitted verbatim.

pub const CLAUDE_MD: &str = r#"## 1. What this project is
{project_name} - {description}
Stack: {stack}

## 2. How I work
I follow the cycle in `docs/feature_cycle.md`:
Interview → Plan → Branch → Implement → PR → Merge

## 3. Current state
See `docs/features/_index.md` for the full dashboard.

## 4. Your first step
1. Read `docs/project.md` to understand the project
2. Read `docs/features/_index.md` to see pending features
3. If a feature is ⚪ Pending with a template spec.md → "Interview me about FEAT-XXX"
4. If a feature has a complete spec.md → "/plan implement FEAT-XXX"

## 5. Important rules
- NEVER code without a branch
- NEVER implement without an approved plan
- Incremental commits per task
- Tests are mandatory

## 6. Terminal rules
- Do NOT use `watch` or commands that refresh forever
- Use `--no-pager` with git: `git --no-pager diff`
- Use `-n` to limit output: `git log -n 5`
- Avoid `tail -f` or any infinite stream
- If a command produces a lot of output, redirect it to a file
"#;

pub const README_MD: &str = r#"# {project_name}

{description}

## Quick Start

```bash
# Setup
python -m venv .venv
source .venv/bin/activate  # Linux/Mac
# .venv\Scripts\activate  # Windows
pip install -r requirements.txt

# Run
python src/main.py
```

## Documentation

- [Project Definition](docs/project.md)
- [Feature Dashboard](docs/features/_index.md)
- [Development Cycle](docs/feature_cycle.md)
- [Architecture](docs/architecture/_index.md)

## Development

This project follows a structured feature development cycle.
See `docs/feature_cycle.md` for the complete workflow.

```
Interview → Plan → Branch → Implement → PR → Merge
```

## Stack

{stack}

---
Created: {date}
"#;

pub const PROJECT_MD: &str = r#"# Project Definition

## Name
{project_name}

## One-liner
{description}

## Stack
- **Backend**: Python, FastAPI
- **Frontend**: Gradio / React
- **Database**: PostgreSQL / SQLite
- **Infrastructure**: Docker, GitHub Actions

## MVP Scope

### Included
- [ ] Feature 1
- [ ] Feature 2
- [ ] Feature 3

### Excluded (Post-MVP)
- Feature X
- Feature Y

## Target Users
[Describe who this project is for]

## Success Metrics
- Metric 1
- Metric 2

---
*Last updated: {date}*
"#;

pub const FEATURES_INDEX_MD: &str = r#"# Features Dashboard

## Overview

| ID | Name | Status | Sprint | Priority |
|----|------|--------|--------|----------|
| FEAT-001 | [Name] | ⚪ Pending | MVP | P0 |

## Status Legend

| Icon | Status | Meaning |
|------|--------|---------|
| ⚪ | Pending | Not started |
| 🟡 | In Progress | Under development |
| 🔵 | In Review | PR open |
| 🟢 | Complete | Merged |
| 🔴 | Blocked | Blocked |

## Priority Legend

| Priority | Meaning |
|----------|---------|
| P0 | Critical - MVP blocker |
| P1 | High - MVP nice to have |
| P2 | Medium - Post-MVP |
| P3 | Low - Future |

## Quick Links

- [Feature Template](_template/)
- [Development Cycle](../feature_cycle.md)
- [Architecture](../architecture/_index.md)

---
*Last updated: {date}*
"#;

pub const FEATURE_SPEC_MD: &str = r#"# FEAT-XXX: [Feature Name]

## Summary
[One paragraph describing what this feature does]

## User Stories
- As a [user] I want [action] so that [benefit]
- As a [user] I want [action] so that [benefit]

## Acceptance Criteria
- [ ] Criterion 1
- [ ] Criterion 2
- [ ] Criterion 3

## Technical Decisions

| Decision | Value | Notes |
|----------|-------|-------|
| [Decision 1] | [Value] | [Why] |
| [Decision 2] | [Value] | [Why] |

## Out of Scope
- Item 1
- Item 2

## Dependencies
- Depends on: [FEAT-XXX, ARCH-XXX]
- Blocks: [FEAT-YYY]

## Open Questions
- [ ] Question 1?
- [ ] Question 2?

---
*Status: ⚪ Pending*
*Created: {date}*
"#;

pub const FEATURE_DESIGN_MD: &str = r#"# FEAT-XXX: Technical Design

## Overview
[Brief technical overview of the implementation approach]

## Components

### New Files
```
src/
├── module/
│   ├── __init__.py
│   ├── models.py
│   └── service.py
tests/
└── test_module.py
```

### Modified Files
- `src/main.py` - Add router
- `requirements.txt` - Add dependencies

## Data Model

```python
# Example model
class Entity:
    id: int
    name: str
    created_at: datetime
```

## API Endpoints

| Method | Endpoint | Description |
|--------|----------|-------------|
| GET | /api/resource | List resources |
| POST | /api/resource | Create resource |

## Sequence Diagram

```
User -> Frontend -> API -> Service -> Database
```

## Dependencies
- New packages: [list]
- External services: [list]

## Security Considerations
- [ ] Input validation
- [ ] Authentication required
- [ ] Rate limiting

## Performance Considerations
- Expected load: X requests/sec
- Caching strategy: [describe]

---
*Last updated: {date}*
"#;

pub const FEATURE_TASKS_MD: &str = r#"# FEAT-XXX: Tasks

## Pre-Implementation
- [ ] spec.md complete and approved
- [ ] design.md complete and approved
- [ ] Branch created: `feature/XXX-name`

## Backend Tasks
- [ ] Task 1: Create models
- [ ] Task 2: Create service layer
- [ ] Task 3: Create API endpoints
- [ ] Task 4: Add validation

## Frontend Tasks
- [ ] Task 5: Create UI components
- [ ] Task 6: Connect to API
- [ ] Task 7: Add error handling

## Testing Tasks
- [ ] Task 8: Unit tests for service
- [ ] Task 9: Unit tests for API
- [ ] Task 10: Integration tests

## Documentation Tasks
- [ ] Task 11: Update README
- [ ] Task 12: Add docstrings
- [ ] Task 13: Update API docs

## DevOps Tasks
- [ ] Task 14: Environment variables
- [ ] Task 15: CI/CD updates

## Post-Implementation
- [ ] PR created
- [ ] Code review complete
- [ ] Merged to main
- [ ] status.md updated

---
*Progress: 0/{total} tasks*
*Last updated: {date}*
"#;

pub const FEATURE_TESTS_MD: &str = r#"# FEAT-XXX: Test Cases

## Unit Tests

### Service Layer
| Test Case | Input | Expected Output | Status |
|-----------|-------|-----------------|--------|
| test_create_valid | valid data | success | ⚪ |
| test_create_invalid | invalid data | validation error | ⚪ |

### API Endpoints
| Test Case | Method | Endpoint | Expected Status | Status |
|-----------|--------|----------|-----------------|--------|
| test_list | GET | /api/resource | 200 | ⚪ |
| test_create | POST | /api/resource | 201 | ⚪ |

## Integration Tests

| Test Case | Description | Status |
|-----------|-------------|--------|
| test_e2e_flow | Complete user flow | ⚪ |

## Edge Cases

| Scenario | Expected Behavior | Status |
|----------|-------------------|--------|
| Empty input | Return validation error | ⚪ |
| Large payload | Handle gracefully | ⚪ |

## Test Commands

```bash
# Run all tests
pytest tests/ -v

# Run specific feature tests
pytest tests/test_feat_xxx.py -v

# Run with coverage
pytest tests/ --cov=src --cov-report=html
```

---
*Coverage Target: 80%*
*Last updated: {date}*
"#;

pub const FEATURE_STATUS_MD: &str = r#"# FEAT-XXX: Status

## Current Status: ⚪ Pending

## Progress

| Phase | Status | Date |
|-------|--------|------|
| Interview | ⚪ Pending | - |
| Plan | ⚪ Pending | - |
| Branch | ⚪ Pending | - |
| Implement | ⚪ Pending | - |
| PR | ⚪ Pending | - |
| Merge | ⚪ Pending | - |

## Task Progress

- Backend: 0/4 tasks
- Frontend: 0/3 tasks
- Tests: 0/3 tasks
- Docs: 0/3 tasks

## Blockers
- None

## Notes

### {date}
- Feature created

---
*Last updated: {date}*
"#;

pub const ARCHITECTURE_INDEX_MD: &str = r#"# Architecture Documentation

## Overview

[High-level architecture description]

## System Components

```
┌─────────────┐     ┌─────────────┐     ┌─────────────┐
│   Frontend  │────▶│   Backend   │────▶│  Database   │
└─────────────┘     └─────────────┘     └─────────────┘
```

## Architecture Decision Records (ADRs)

| ID | Decision | Status | Date |
|----|----------|--------|------|
| ARCH-001 | [System Overview] | ✅ Accepted | {date} |

## Key Principles

1. **Principle 1**: Description
2. **Principle 2**: Description
3. **Principle 3**: Description

## Tech Stack

| Layer | Technology | Rationale |
|-------|------------|-----------|
| Backend | FastAPI | Performance, async support |
| Frontend | Gradio | Rapid prototyping |
| Database | PostgreSQL | Reliability |

---
*Last updated: {date}*
"#;

pub const SPRINTS_INDEX_MD: &str = r#"# Sprints Dashboard

## Current Sprint

**SPRINT-001: MVP**
- Start: {date}
- End: TBD
- Goal: [Sprint goal]

## Sprint History

| Sprint | Goal | Status | Features |
|--------|------|--------|----------|
| SPRINT-001 | MVP | 🟡 Active | FEAT-001, FEAT-002 |

## Sprint Template

Each sprint folder contains:
- `goals.md` - Sprint objectives
- `features.md` - Features included
- `retro.md` - Retrospective notes

---
*Last updated: {date}*
"#;

pub const DECISIONS_INDEX_MD: &str = r#"# Architecture Decision Records (ADRs)

## What is an ADR?

An Architecture Decision Record captures an important architectural decision along with its context and consequences.

## ADR Template

```markdown
# ADR-XXX: [Title]

## Status
[Proposed | Accepted | Deprecated | Superseded]

## Context
[What is the issue that we're seeing that is motivating this decision?]

## Decision
[What is the change that we're proposing and/or doing?]

## Consequences
[What becomes easier or more difficult to do because of this change?]
```

## ADR Index

| ID | Decision | Status | Date |
|----|----------|--------|------|
| ADR-001 | [First decision] | Proposed | {date} |

---
*Last updated: {date}*
"#;

pub const FEATURE_CYCLE_MD: &str = r#"# Feature Development Cycle

## Goal

This document defines the exact workflow for implementing any feature in this project. Following the cycle keeps work consistent, traceable and reviewed.

---

## Overview

```
┌─────────────────────────────────────────────────────────────────────────────┐
│                        FEATURE DEVELOPMENT CYCLE                            │
├─────────────────────────────────────────────────────────────────────────────┤
│                                                                             │
│   1. INTERVIEW          2. PLAN            3. BRANCH         4. IMPLEMENT   │
│   ┌──────────┐         ┌─────────┐        ┌─────────┐       ┌─────────┐     │
│   │ Questions│   ───►  │ Explore │  ───►  │ git     │ ───►  │ Code    │     │
│   │ Decisions│         │ Design  │        │ checkout│       │ Tests   │     │
│   │ spec.md  │         │ plan    │        │ -b      │       │ Commits │     │
│   └──────────┘         └─────────┘        └─────────┘       └─────────┘     │
│                                                                  │          │
│                                                                  ▼          │
│   6. MERGE              5. PR              ◄──────────────────────          │
│   ┌─────────┐          ┌─────────┐                                          │
│   │ Review  │   ◄───   │ Push    │                                          │
│   │ Approve │          │ gh pr   │                                          │
│   │ Update  │          │ create  │                                          │
│   └─────────┘          └─────────┘                                          │
│                                                                             │
└─────────────────────────────────────────────────────────────────────────────┘
```

---

## Phase 1: INTERVIEW (Specification)

### Purpose
Capture ALL technical and product decisions BEFORE writing code.

### How to start
```
"Interview me about FEAT-XXX"
```

### Process

1. **The assistant asks structured questions** about:
   - UI/UX decisions
   - System behaviour
   - Edge cases
   - Limits and constraints
   - Integrations

2. **The user answers with clear options**:
   - ✅ GOOD: "Import from .env (DATABASE_URL format)"
   - ✅ GOOD: "Retry 3x automatically + notification"
   - ❌ BAD: "I don't know, whatever you think"

3. **The assistant updates spec.md** with each decision in table form.

### Output
- `docs/features/FEAT-XXX/spec.md` updated with every decision

---

## Phase 2: PLAN (Technical Design)

### Purpose
Design the implementation BEFORE writing code.

### How to start
```
/plan implement FEAT-XXX
```

### Process

1. The assistant enters plan mode (read only, no code edits)
2. Explore the codebase
3. Produce a detailed plan with files, order and snippets
4. The user reviews and approves

### Output
- `docs/features/FEAT-XXX/design.md` completed
- `docs/features/FEAT-XXX/tasks.md` with a checklist

---

## Phase 3: BRANCH (Preparation)

### ⚠️ CRITICAL
```
NEVER start coding without creating the branch first.
```

### Process
```bash
git checkout main
git checkout -b feature/XXX-descriptive-name
```

---

## Phase 4: IMPLEMENT (Development)

### Process

1. Follow tasks.md in order
2. One file at a time
3. Tests for every module
4. Incremental commits

### Rules
- ✅ Follow existing patterns
- ✅ Tests are mandatory
- ❌ Do not skip the plan order
- ❌ Do not implement everything at once

---

## Phase 5: PR (Pull Request)

### Process
```bash
git add [relevant files]
git commit -m "Implement FEAT-XXX: Name"
git push -u origin feature/XXX-name
gh pr create --title "FEAT-XXX: Name" --body "..." --base main
```

---

## Phase 6: MERGE (Close-out)

### Process

1. Review the PR
2. Approve and merge
3. Update `docs/features/FEAT-XXX/status.md` → 🟢 Complete
4. Update `docs/features/_index.md`
5. Delete the local branch

---

## Quick Checklist

```
□ INTERVIEW - spec.md complete
□ PLAN - design.md and tasks.md approved
□ BRANCH - branch created BEFORE coding
□ IMPLEMENT - tasks done, tests passing
□ PR - opened with a full description
□ MERGE - documentation updated
```

---

## Anti-Patterns

| ❌ Anti-Pattern | ✅ Correct |
|----------------|-----------|
| Coding without an interview | Interview first |
| Coding without a branch | Branch before code |
| Coding without a plan | Plan first |
| Giant commits | Incremental commits |
| Ignoring tests | Tests are mandatory |

---
*Last updated: {date}*
"#;

pub const NEW_FEATURE_COMMAND: &str = r#"---
description: Create a new feature from template
argument-hint: FEAT-XXX-name
allowed-tools: Bash(mkdir:*), Bash(cp:*), Write, Read
---

# Create New Feature

## Instructions

1. Parse the argument to get feature ID and name
   - Example: `FEAT-001-auth` → ID=001, name=auth

2. Create feature directory:
   ```bash
   mkdir -p docs/features/FEAT-{ID}-{name}
   ```

3. Copy all files from template:
   ```bash
   cp docs/features/_template/* docs/features/FEAT-{ID}-{name}/
   ```

4. Update each file:
   - Replace `FEAT-XXX` with actual ID
   - Replace `[Feature Name]` with actual name
   - Set creation date

5. Update `docs/features/_index.md`:
   - Add new row to features table

6. Report what was created

## Argument
$ARGUMENTS
"#;

pub const INTERVIEW_COMMAND: &str = r#"---
description: Start interview process for a feature
argument-hint: FEAT-XXX
allowed-tools: Read, Write
---

# Interview Process

## Instructions

1. Read `docs/features/$ARGUMENTS/spec.md`

2. If spec.md is still template:
   - Start asking structured questions
   - Max 3-4 questions per turn
   - Provide suggested options for each
   - Update spec.md with each decision

3. If spec.md is already filled:
   - Review and ask if anything needs changes
   - Suggest moving to Plan phase

## Questions to Cover

- User stories and acceptance criteria
- UI/UX decisions
- Technical constraints
- Edge cases
- Error handling
- Security requirements
- Performance requirements

## Output Format

Update spec.md with decisions in table format:

| Decision | Value | Notes |
|----------|-------|-------|
| [topic] | [choice] | [why] |

## Argument
$ARGUMENTS
"#;

pub const PLAN_COMMAND: &str = r#"---
description: Create implementation plan for a feature
argument-hint: FEAT-XXX
allowed-tools: Read, Write, Bash(find:*), Bash(grep:*)
---

# Plan Implementation

## Instructions

1. Read feature spec:
   - `docs/features/$ARGUMENTS/spec.md`

2. Explore codebase:
   - Identify relevant existing files
   - Detect patterns to follow
   - Find dependencies

3. Create design document:
   - Update `docs/features/$ARGUMENTS/design.md`
   - List files to create/modify
   - Define data models
   - Define API endpoints
   - Add sequence diagrams if needed

4. Create task list:
   - Update `docs/features/$ARGUMENTS/tasks.md`
   - Order tasks by dependency
   - Group by: Backend, Frontend, Tests, Docs

5. Ask user to approve before implementation

## Do NOT
- Write any actual code
- Create any source files
- Modify anything outside docs/

## Argument
$ARGUMENTS
"#;

pub const IMPLEMENT_COMMAND: &str = r#"---
description: Start implementation of a feature
argument-hint: FEAT-XXX
allowed-tools: Read, Write, Edit, Bash(git:*), Bash(pytest:*), Bash(python:*)
---

# Implement Feature

## Pre-flight Checks

1. Verify branch exists:
   ```bash
   git branch --show-current
   ```
   - If on main/master → Create branch first!
   - Expected: `feature/XXX-name`

2. Verify plan is approved:
   - Read `docs/features/$ARGUMENTS/design.md`
   - Read `docs/features/$ARGUMENTS/tasks.md`

## Implementation Process

1. Update status:
   - Set `docs/features/$ARGUMENTS/status.md` to 🟡 In Progress

2. Follow tasks.md in order:
   - Mark each task as you start/complete
   - One file at a time
   - Run tests after each module

3. Commit incrementally:
   ```bash
   git add [files]
   git commit -m "FEAT-XXX: [what was done]"
   ```

## Completion

When all tasks done:
1. Run full test suite
2. Update status.md with completion
3. Suggest creating PR

## Argument
$ARGUMENTS
"#;

pub const SETTINGS_JSON: &str = r#"{
  "permissions": {
    "allow": [
      "Read",
      "Write",
      "Edit",
      "Bash(git:*)",
      "Bash(pytest:*)",
      "Bash(python:*)",
      "Bash(pip:*)",
      "Bash(mkdir:*)",
      "Bash(cp:*)",
      "Bash(cat:*)",
      "Bash(ls:*)",
      "Bash(find:*)",
      "Bash(grep:*)"
    ],
    "deny": [
      "Bash(rm -rf:*)",
      "Bash(sudo:*)"
    ]
  }
}
"#;
