//! Shell command execution.

use crate::error::{Result, SpecrigError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    fn from_output(output: Output, options: &CommandOptions) -> Self {
        let stdout = if options.capture_stdout {
            String::from_utf8_lossy(&output.stdout).to_string()
        } else {
            String::new()
        };

        let stderr = if options.capture_stderr {
            String::from_utf8_lossy(&output.stderr).to_string()
        } else {
            String::new()
        };

        Self {
            exit_code: output.status.code(),
            stdout,
            stderr,
            success: output.status.success(),
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Run in `cwd`, inheriting stdout and stderr.
    pub fn inherit_in(cwd: &Path) -> Self {
        Self {
            cwd: Some(cwd.to_path_buf()),
            ..Default::default()
        }
    }
}

/// Execute a command line through the platform shell.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let mut cmd = Command::new(detect_shell());
    cmd.arg(shell_flag());
    cmd.arg(command);
    run(cmd, command, options)
}

/// Execute a command split on whitespace, without a shell.
///
/// There is no quoting support: `a "b c"` runs `a` with the arguments
/// `"b` and `c"`.
pub fn execute_words(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let mut words = command.split_whitespace();
    let program = words.next().ok_or_else(|| SpecrigError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    let mut cmd = Command::new(program);
    cmd.args(words);
    run(cmd, command, options)
}

fn run(mut cmd: Command, command: &str, options: &CommandOptions) -> Result<CommandResult> {
    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::inherit());
    cmd.stdout(if options.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    cmd.stderr(if options.capture_stderr {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });

    tracing::debug!("Running command: {}", command);
    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to launch '{}': {}", command, e);
        SpecrigError::CommandFailed {
            command: command.to_string(),
            code: None,
        }
    })?;

    Ok(CommandResult::from_output(output, options))
}

fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
