use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn create_structure(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("create-structure").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn creates_directories_and_files() {
    let dir = TempDir::new().unwrap();
    create_structure(&dir)
        .args(["Atlas", "Maps for teams", "Rust, Axum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8 directories, 20 files"));

    for sub in [".claude/commands", "docs/features/_template", "docs/decisions", "src", "tests"] {
        assert!(dir.path().join(sub).is_dir(), "missing {sub}");
    }
    assert!(dir.path().join("src/.gitkeep").exists());

    let project = std::fs::read_to_string(dir.path().join("docs/project.md")).unwrap();
    assert!(project.contains("Atlas"));
    assert!(project.contains("Maps for teams"));
    let claude = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert!(claude.contains("Stack: Rust, Axum"));

    let settings = std::fs::read_to_string(dir.path().join(".claude/settings.json")).unwrap();
    serde_json::from_str::<serde_json::Value>(&settings).unwrap();
}

#[test]
fn defaults_fill_missing_description_and_stack() {
    let dir = TempDir::new().unwrap();
    create_structure(&dir).arg("Atlas").assert().success();

    let project = std::fs::read_to_string(dir.path().join("docs/project.md")).unwrap();
    assert!(project.contains("Atlas - A new project"));
    let claude = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert!(claude.contains("Stack: Python, FastAPI, PostgreSQL, Docker"));
}

#[test]
fn dir_flag_selects_base() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("nested/app");
    create_structure(&dir)
        .args(["Atlas", "--dir"])
        .arg(&target)
        .assert()
        .success();
    assert!(target.join("CLAUDE.md").exists());
    assert!(!dir.path().join("CLAUDE.md").exists());
}

#[test]
fn rerun_overwrites_files() {
    let dir = TempDir::new().unwrap();
    create_structure(&dir).arg("Atlas").assert().success();
    std::fs::write(dir.path().join("README.md"), "local edits\n").unwrap();

    create_structure(&dir).arg("Atlas").assert().success();
    let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("Atlas"));
    assert!(!readme.contains("local edits"));
}

#[test]
fn json_lists_created_paths() {
    let dir = TempDir::new().unwrap();
    let assert = create_structure(&dir)
        .args(["Atlas", "--json"])
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["directories"].as_array().map(Vec::len), Some(8));
    assert_eq!(value["files"].as_array().map(Vec::len), Some(20));
    assert_eq!(value["project"]["name"], "Atlas");
}

#[test]
fn interactive_empty_name_writes_nothing() {
    let dir = TempDir::new().unwrap();
    create_structure(&dir)
        .write_stdin("\n\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Project name is required"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn interactive_prompts_build_project() {
    let dir = TempDir::new().unwrap();
    create_structure(&dir)
        .write_stdin("Beacon\nSignals\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project name: "));

    let claude = std::fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    assert!(claude.contains("Beacon"));
}
