//! Typed git client over the command-runner seam
//!
//! One method per git operation the builder needs. Each operation is
//! classified at design time as fatal (non-zero exit aborts the run) or
//! tolerated (non-zero exit is logged and ignored).

use crate::error::Result;
use crate::run::{CommandLine, CommandRunner, Output};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Issues git commands in a fixed working directory
///
/// The builder holds two of these: one for the outer workspace and one for
/// the inner `upstream/` checkout.
pub struct GitClient<'a> {
    runner: &'a dyn CommandRunner,
    dir: PathBuf,
}

impl<'a> GitClient<'a> {
    /// Create a client that runs git in `dir`.
    pub fn new(runner: &'a dyn CommandRunner, dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            dir: dir.into(),
        }
    }

    /// Directory this client operates in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn exec(&self, args: &[&str]) -> Result<(CommandLine, Output)> {
        let command = CommandLine::git(args);
        let output = self.runner.run(&self.dir, &command)?;
        Ok((command, output))
    }

    /// Run a fatal git step: non-zero exit becomes an error.
    fn exec_fatal(&self, args: &[&str]) -> Result<Output> {
        let (command, output) = self.exec(args)?;
        if output.success() {
            Ok(output)
        } else {
            Err(output.into_error(&command))
        }
    }

    /// Run a tolerated git step: non-zero exit is logged and ignored.
    ///
    /// A spawn failure (git missing entirely) is still fatal.
    fn exec_tolerated(&self, args: &[&str]) -> Result<()> {
        let (command, output) = self.exec(args)?;
        if !output.success() {
            warn!(
                command = %command,
                code = ?output.code,
                stderr = %output.stderr.trim_end(),
                "tolerated git failure"
            );
        }
        Ok(())
    }

    /// `git submodule update --checkout` (fatal)
    pub fn update_submodules(&self) -> Result<()> {
        self.exec_fatal(&["submodule", "update", "--checkout"])?;
        Ok(())
    }

    /// `git remote add <name> <url>` (tolerated)
    ///
    /// Fails when the remote already exists; that is the common case on
    /// repeat runs and never aborts the build.
    pub fn add_remote(&self, name: &str, url: &str) -> Result<()> {
        self.exec_tolerated(&["remote", "add", name, url])
    }

    /// `git fetch --all` (fatal)
    pub fn fetch_all(&self) -> Result<()> {
        self.exec_fatal(&["fetch", "--all"])?;
        Ok(())
    }

    /// `git checkout <branch>` (fatal)
    pub fn checkout(&self, branch: &str) -> Result<()> {
        self.exec_fatal(&["checkout", branch])?;
        Ok(())
    }

    /// `git checkout -b <branch>` (fatal)
    pub fn create_branch(&self, branch: &str) -> Result<()> {
        self.exec_fatal(&["checkout", "-b", branch])?;
        Ok(())
    }

    /// `git branch -D <branch>` (tolerated)
    ///
    /// Deleting a branch that does not exist is fine.
    pub fn delete_branch(&self, branch: &str) -> Result<()> {
        self.exec_tolerated(&["branch", "-D", branch])
    }

    /// `git cherry-pick -x <sha>` (fatal)
    ///
    /// On conflict the run stops immediately and the repository is left in
    /// the conflicted state for manual resolution.
    pub fn cherry_pick(&self, sha: &str) -> Result<()> {
        self.exec_fatal(&["cherry-pick", "-x", sha])?;
        Ok(())
    }

    /// `git reset --soft HEAD~<depth>` (fatal)
    ///
    /// `HEAD~0` is a valid degenerate no-op for an empty cherry list.
    pub fn reset_soft(&self, depth: usize) -> Result<()> {
        let spec = format!("HEAD~{depth}");
        self.exec_fatal(&["reset", "--soft", &spec])?;
        Ok(())
    }

    /// `git commit -m <message>` (fatal)
    pub fn commit(&self, message: &str) -> Result<()> {
        self.exec_fatal(&["commit", "-m", message])?;
        Ok(())
    }

    /// `git add .` (fatal)
    pub fn stage_all(&self) -> Result<()> {
        self.exec_fatal(&["add", "."])?;
        Ok(())
    }

    /// `git push <remote> <branch>` (fatal)
    pub fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.exec_fatal(&["push", remote, branch])?;
        Ok(())
    }

    /// `git push -f <remote> <branch>` (fatal)
    ///
    /// Network and auth errors surface here.
    pub fn push_force(&self, remote: &str, branch: &str) -> Result<()> {
        self.exec_fatal(&["push", "-f", remote, branch])?;
        Ok(())
    }

    /// `git rev-parse --abbrev-ref HEAD` (fatal), trimmed
    pub fn current_branch(&self) -> Result<String> {
        let output = self.exec_fatal(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.stdout.trim().to_string())
    }
}
