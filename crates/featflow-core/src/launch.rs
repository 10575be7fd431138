//! Opens a new terminal window rooted in a worktree and starts the assistant.
//!
//! The spawned process is detached: it is never waited on and its exit
//! status is not observed.

use crate::config::{AssistantConfig, Config};
use crate::error::{FlowError, Result};
use serde::Serialize;
use std::path::Path;
use std::process::{Command, Stdio};

/// Terminal emulators probed on PATH, in order, on Unix systems other than macOS.
pub const UNIX_TERMINALS: &[&str] = &["x-terminal-emulator", "gnome-terminal", "konsole", "xterm"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalKind {
    /// `cmd /c start`
    WindowsCmd,
    /// Terminal.app driven through `osascript`.
    MacTerminal,
    GnomeTerminal,
    Konsole,
    /// Anything accepting xterm's `-T <title> -e <cmd...>` (xterm,
    /// x-terminal-emulator).
    XtermLike(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalCommand {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct LaunchRequest<'a> {
    pub dir: &'a Path,
    pub title: &'a str,
    pub assistant: &'a AssistantConfig,
}

// ---------------------------------------------------------------------------
// Command building
// ---------------------------------------------------------------------------

fn sh_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

fn applescript_escape(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', "\\\"")
}

pub fn build_command(kind: &TerminalKind, req: &LaunchRequest<'_>) -> TerminalCommand {
    let assistant = req.assistant;
    let dir = req.dir.to_string_lossy().into_owned();
    let assistant_argv = || {
        std::iter::once(assistant.command.clone()).chain(assistant.args.iter().cloned())
    };

    match kind {
        TerminalKind::WindowsCmd => TerminalCommand {
            program: "cmd".to_string(),
            args: ["/c", "start", req.title, "cmd", "/k"]
                .into_iter()
                .map(String::from)
                .chain(std::iter::once(assistant.command_line()))
                .collect(),
        },
        TerminalKind::MacTerminal => {
            let shell = format!("cd {} && {}", sh_quote(&dir), assistant.command_line());
            TerminalCommand {
                program: "osascript".to_string(),
                args: vec![
                    "-e".to_string(),
                    format!(
                        "tell application \"Terminal\" to do script \"{}\"",
                        applescript_escape(&shell)
                    ),
                    "-e".to_string(),
                    "tell application \"Terminal\" to activate".to_string(),
                ],
            }
        }
        TerminalKind::GnomeTerminal => TerminalCommand {
            program: "gnome-terminal".to_string(),
            args: [
                "--title".to_string(),
                req.title.to_string(),
                "--working-directory".to_string(),
                dir,
                "--".to_string(),
            ]
            .into_iter()
            .chain(assistant_argv())
            .collect(),
        },
        TerminalKind::Konsole => TerminalCommand {
            program: "konsole".to_string(),
            args: ["--workdir".to_string(), dir, "-e".to_string()]
                .into_iter()
                .chain(assistant_argv())
                .collect(),
        },
        TerminalKind::XtermLike(program) => TerminalCommand {
            program: program.clone(),
            args: ["-T".to_string(), req.title.to_string(), "-e".to_string()]
                .into_iter()
                .chain(assistant_argv())
                .collect(),
        },
    }
}

/// Expand a configured argv template. Returns `None` for an empty template.
pub fn from_template(template: &[String], req: &LaunchRequest<'_>) -> Option<TerminalCommand> {
    let dir = req.dir.to_string_lossy();
    let command = req.assistant.command_line();
    let mut expanded = template.iter().map(|part| {
        part.replace("{dir}", &dir)
            .replace("{title}", req.title)
            .replace("{command}", &command)
    });
    let program = expanded.next()?;
    Some(TerminalCommand {
        program,
        args: expanded.collect(),
    })
}

// ---------------------------------------------------------------------------
// Detection and spawning
// ---------------------------------------------------------------------------

fn kind_for(program: &str) -> TerminalKind {
    match program {
        "gnome-terminal" => TerminalKind::GnomeTerminal,
        "konsole" => TerminalKind::Konsole,
        other => TerminalKind::XtermLike(other.to_string()),
    }
}

/// Pick the terminal for this platform.
pub fn detect() -> Result<TerminalKind> {
    if cfg!(windows) {
        return Ok(TerminalKind::WindowsCmd);
    }
    if cfg!(target_os = "macos") {
        return Ok(TerminalKind::MacTerminal);
    }
    UNIX_TERMINALS
        .iter()
        .find(|candidate| which::which(candidate).is_ok())
        .map(|candidate| kind_for(candidate))
        .ok_or_else(|| FlowError::NoTerminal(UNIX_TERMINALS.join(", ")))
}

/// The command that would be launched for `req` under `config`.
pub fn resolve(config: &Config, req: &LaunchRequest<'_>) -> Result<TerminalCommand> {
    if let Some(cmd) = config
        .terminal
        .as_deref()
        .and_then(|template| from_template(template, req))
    {
        return Ok(cmd);
    }
    Ok(build_command(&detect()?, req))
}

/// Start `cmd` in `dir` without waiting for it.
pub fn spawn_detached(cmd: &TerminalCommand, dir: &Path) -> Result<()> {
    let child = Command::new(&cmd.program)
        .args(&cmd.args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| FlowError::Launch(format!("{}: {e}", cmd.program)))?;
    tracing::info!(program = %cmd.program, pid = child.id(), dir = %dir.display(), "launched terminal");
    Ok(())
}

/// Resolve and spawn the terminal for `req`.
pub fn launch(config: &Config, req: &LaunchRequest<'_>) -> Result<TerminalCommand> {
    let cmd = resolve(config, req)?;
    spawn_detached(&cmd, req.dir)?;
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request<'a>(dir: &'a Path, assistant: &'a AssistantConfig) -> LaunchRequest<'a> {
        LaunchRequest {
            dir,
            title: "FEAT-001-auth - backend",
            assistant,
        }
    }

    #[test]
    fn windows_starts_titled_cmd_window() {
        let assistant = AssistantConfig::default();
        let cmd = build_command(
            &TerminalKind::WindowsCmd,
            &request(Path::new(r"C:\work\app-FEAT-001-auth-backend"), &assistant),
        );
        assert_eq!(cmd.program, "cmd");
        assert_eq!(
            cmd.args,
            [
                "/c",
                "start",
                "FEAT-001-auth - backend",
                "cmd",
                "/k",
                "claude --dangerously-skip-permissions"
            ]
        );
    }

    #[test]
    fn mac_script_changes_directory_first() {
        let assistant = AssistantConfig::default();
        let cmd = build_command(
            &TerminalKind::MacTerminal,
            &request(Path::new("/Users/me/it's-app"), &assistant),
        );
        assert_eq!(cmd.program, "osascript");
        assert_eq!(
            cmd.args[1],
            r#"tell application "Terminal" to do script "cd '/Users/me/it'\\''s-app' && claude --dangerously-skip-permissions""#
        );
    }

    #[test]
    fn gnome_terminal_gets_working_directory() {
        let assistant = AssistantConfig::default();
        let cmd = build_command(
            &TerminalKind::GnomeTerminal,
            &request(Path::new("/work/app-FEAT-001-auth-backend"), &assistant),
        );
        assert_eq!(
            cmd.args,
            [
                "--title",
                "FEAT-001-auth - backend",
                "--working-directory",
                "/work/app-FEAT-001-auth-backend",
                "--",
                "claude",
                "--dangerously-skip-permissions"
            ]
        );
    }

    #[test]
    fn xterm_like_keeps_program_name() {
        let assistant = AssistantConfig {
            command: "aider".into(),
            args: vec![],
        };
        let cmd = build_command(
            &TerminalKind::XtermLike("x-terminal-emulator".into()),
            &request(Path::new("/w"), &assistant),
        );
        assert_eq!(cmd.program, "x-terminal-emulator");
        assert_eq!(cmd.args, ["-T", "FEAT-001-auth - backend", "-e", "aider"]);
    }

    #[test]
    fn template_substitutes_placeholders() {
        let assistant = AssistantConfig::default();
        let template: Vec<String> = ["wezterm", "start", "--cwd", "{dir}", "--", "sh", "-c", "{command}"]
            .into_iter()
            .map(String::from)
            .collect();
        let cmd = from_template(&template, &request(Path::new("/w/app"), &assistant)).unwrap();
        assert_eq!(cmd.program, "wezterm");
        assert_eq!(
            cmd.args,
            ["start", "--cwd", "/w/app", "--", "sh", "-c", "claude --dangerously-skip-permissions"]
        );
    }

    #[test]
    fn empty_template_falls_through() {
        let assistant = AssistantConfig::default();
        assert!(from_template(&[], &request(Path::new("/w"), &assistant)).is_none());
    }

    #[test]
    fn configured_template_wins_over_detection() {
        let assistant = AssistantConfig::default();
        let config = Config {
            terminal: Some(vec!["my-term".into(), "{title}".into()]),
            ..Config::default()
        };
        let cmd = resolve(&config, &request(Path::new("/w"), &assistant)).unwrap();
        assert_eq!(cmd.program, "my-term");
        assert_eq!(cmd.args, ["FEAT-001-auth - backend"]);
    }

    #[test]
    fn spawn_failure_is_a_launch_error() {
        let dir = TempDir::new().unwrap();
        let cmd = TerminalCommand {
            program: "featflow-no-such-terminal".into(),
            args: vec![],
        };
        let err = spawn_detached(&cmd, dir.path()).unwrap_err();
        assert!(matches!(err, FlowError::Launch(ref m) if m.starts_with("featflow-no-such-terminal")));
    }
}
