//! Error types for cherrytree

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can terminate a release build
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be loaded or failed validation
    #[error("configuration error: {0}")]
    Config(String),

    /// An external command could not be spawned at all
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        /// The command line that failed to spawn
        command: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// An external command ran and exited non-zero (a fatal step)
    #[error("command failed ({}): `{command}`\n{stderr}", code_label(.code))]
    Command {
        /// The command line that failed
        command: String,
        /// Exit code, if the process exited normally
        code: Option<i32>,
        /// Captured stderr from the failed command
        stderr: String,
    },

    /// Internal invariant violation
    #[error("internal error: {0}")]
    Internal(String),
}

fn code_label(code: &Option<i32>) -> String {
    code.map_or_else(|| "killed by signal".to_string(), |c| format!("exit {c}"))
}

impl Error {
    /// Build a [`Error::Command`] from a command line and its captured output.
    pub fn command_failed(command: impl Into<String>, code: Option<i32>, stderr: &str) -> Self {
        Self::Command {
            command: command.into(),
            code,
            stderr: stderr.trim_end().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_includes_exit_code_and_stderr() {
        let err = Error::command_failed("git fetch --all", Some(128), "fatal: no network\n");
        let msg = err.to_string();
        assert!(msg.contains("exit 128"));
        assert!(msg.contains("git fetch --all"));
        assert!(msg.contains("fatal: no network"));
    }

    #[test]
    fn command_error_signal_death_has_no_code() {
        let err = Error::command_failed("git push", None, "");
        assert!(err.to_string().contains("killed by signal"));
    }
}
