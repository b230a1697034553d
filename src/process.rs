//! Child process runner shared by the git and gh wrappers.
//!
//! Commands run synchronously with captured stdout/stderr. A non-zero exit
//! becomes `SubmitError::ExternalCommand` carrying the captured error text.

use crate::error::{Result, SubmitError};
use std::path::Path;
use std::process::{Command, Output};

/// Captured output of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
    /// Exit status code, `-1` when terminated by a signal.
    pub code: i32,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            code: output.status.code().unwrap_or(-1),
        }
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Returns non-blank stdout lines.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}

/// Render a command line for error messages and logs.
pub fn pretty_command(program: &str, args: &[&str]) -> String {
    let mut parts = Vec::with_capacity(args.len() + 1);
    parts.push(program.to_string());
    parts.extend(args.iter().map(|a| a.to_string()));
    parts.join(" ")
}

/// Run a command and return its output whatever the exit status.
///
/// Only a spawn failure (program missing, bad cwd) is an error here.
pub fn run_unchecked(program: &str, cwd: Option<&Path>, args: &[&str]) -> Result<CommandOutput> {
    let pretty = pretty_command(program, args);
    tracing::debug!(command = %pretty, cwd = ?cwd, "running");

    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command.output().map_err(|e| SubmitError::ExternalCommand {
        command: pretty.clone(),
        code: -1,
        stderr: format!("failed to execute {}: {} (is it installed?)", program, e),
    })?;

    let captured = CommandOutput::from_output(&output);
    tracing::debug!(command = %pretty, code = captured.code, "finished");
    Ok(captured)
}

/// Run a command, treating a non-zero exit as a hard failure.
pub fn run(program: &str, cwd: Option<&Path>, args: &[&str]) -> Result<CommandOutput> {
    let output = run_unchecked(program, cwd, args)?;
    if output.success() {
        return Ok(output);
    }

    let stderr = if output.stderr.is_empty() {
        output.stdout.clone()
    } else {
        output.stderr.clone()
    };
    Err(SubmitError::ExternalCommand {
        command: pretty_command(program, args),
        code: output.code,
        stderr,
    })
}
