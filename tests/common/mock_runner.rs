//! Mock command runner for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use cherrytree::error::Result;
use cherrytree::run::{CommandLine, CommandRunner, Output};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Record of one executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Directory the command ran in
    pub dir: PathBuf,
    /// Rendered command line (e.g. "git fetch --all")
    pub command: String,
}

/// Scripted non-zero exit for commands matching a substring
#[derive(Debug, Clone)]
struct ScriptedFailure {
    needle: String,
    code: i32,
    stderr: String,
}

/// Simple mock command runner for testing
///
/// Features:
/// - Records every command line with its working directory
/// - Scripted non-zero exits per command substring (for fatal/tolerated paths)
/// - Scripted stdout per command substring (for `rev-parse`)
#[derive(Default)]
pub struct MockRunner {
    calls: Mutex<Vec<RecordedCall>>,
    failures: Mutex<Vec<ScriptedFailure>>,
    stdout_responses: Mutex<Vec<(String, String)>>,
}

impl MockRunner {
    /// Create a mock where every command succeeds with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    // === Scripting methods ===

    /// Make commands whose rendered line contains `needle` exit non-zero.
    pub fn fail_matching(&self, needle: &str, code: i32, stderr: &str) {
        self.failures.lock().unwrap().push(ScriptedFailure {
            needle: needle.to_string(),
            code,
            stderr: stderr.to_string(),
        });
    }

    /// Set stdout for commands whose rendered line contains `needle`.
    pub fn set_stdout(&self, needle: &str, stdout: &str) {
        self.stdout_responses
            .lock()
            .unwrap()
            .push((needle.to_string(), stdout.to_string()));
    }

    // === Call verification methods ===

    /// All recorded calls, in execution order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Rendered command lines, in execution order.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command).collect()
    }

    /// Rendered command lines that ran in `dir`.
    pub fn command_lines_in(&self, dir: &Path) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.dir == dir)
            .map(|c| c.command)
            .collect()
    }

    /// Assert that some command line contains `needle`.
    pub fn assert_called(&self, needle: &str) {
        let lines = self.command_lines();
        assert!(
            lines.iter().any(|l| l.contains(needle)),
            "Expected a command containing {needle:?} but got: {lines:?}"
        );
    }

    /// Assert that no command line contains `needle`.
    pub fn assert_not_called(&self, needle: &str) {
        let lines = self.command_lines();
        assert!(
            !lines.iter().any(|l| l.contains(needle)),
            "Expected no command containing {needle:?} but got: {lines:?}"
        );
    }

    /// Assert that commands matching the needles ran in the given order.
    pub fn assert_order(&self, needles: &[&str]) {
        let lines = self.command_lines();
        let mut positions = Vec::new();
        for needle in needles {
            let pos = lines.iter().position(|l| l.contains(needle));
            assert!(
                pos.is_some(),
                "Expected a command containing {needle:?} but got: {lines:?}"
            );
            positions.push(pos.unwrap());
        }
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(
            positions, sorted,
            "Commands out of order for {needles:?}: {lines:?}"
        );
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, dir: &Path, command: &CommandLine) -> Result<Output> {
        let line = command.to_string();
        self.calls.lock().unwrap().push(RecordedCall {
            dir: dir.to_path_buf(),
            command: line.clone(),
        });

        // Scripted failure takes precedence
        if let Some(failure) = self
            .failures
            .lock()
            .unwrap()
            .iter()
            .find(|f| line.contains(&f.needle))
        {
            return Ok(Output {
                code: Some(failure.code),
                stdout: String::new(),
                stderr: failure.stderr.clone(),
            });
        }

        let stdout = self
            .stdout_responses
            .lock()
            .unwrap()
            .iter()
            .find(|(needle, _)| line.contains(needle))
            .map(|(_, out)| out.clone())
            .unwrap_or_default();

        Ok(Output {
            code: Some(0),
            stdout,
            stderr: String::new(),
        })
    }
}
