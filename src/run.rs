//! Injectable command-runner seam
//!
//! Every external command the builder issues goes through [`CommandRunner`],
//! so tests can substitute a recording mock for the real subprocess layer.

use crate::error::{Error, Result};
use std::path::Path;
use std::process;

/// A fully-formed command line to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Program name (e.g. "git")
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
}

impl CommandLine {
    /// Create a command line from a program and its arguments.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    /// Create a `git` command line.
    #[must_use]
    pub fn git(args: &[&str]) -> Self {
        Self::new("git", args)
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Captured result of one external command
///
/// A non-zero exit is data here, not an error; callers classify each step
/// as fatal or tolerated.
#[derive(Debug, Clone, Default)]
pub struct Output {
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    /// Captured stdout (lossy UTF-8)
    pub stdout: String,
    /// Captured stderr (lossy UTF-8)
    pub stderr: String,
}

impl Output {
    /// Whether the command exited zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn this output into the error for a fatal step.
    #[must_use]
    pub fn into_error(self, command: &CommandLine) -> Error {
        Error::command_failed(command.to_string(), self.code, &self.stderr)
    }
}

/// Executes external commands on behalf of the builder
pub trait CommandRunner {
    /// Run `command` in `dir`, capturing its output.
    ///
    /// Returns `Err` only when the process cannot be spawned at all;
    /// a non-zero exit comes back as a normal [`Output`].
    fn run(&self, dir: &Path, command: &CommandLine) -> Result<Output>;
}

/// The real runner, backed by `std::process::Command`
///
/// No timeout is applied; a hung external command hangs the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, dir: &Path, command: &CommandLine) -> Result<Output> {
        let output = process::Command::new(&command.program)
            .args(&command.args)
            .current_dir(dir)
            .output()
            .map_err(|source| Error::Launch {
                command: command.to_string(),
                source,
            })?;

        Ok(Output {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
