//! CLI surface for cherrytree

mod build;
pub mod style;

pub use build::run_build;

use cherrytree::release::ProgressCallback;
use clap::Parser;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;
use style::spinner_style;

/// Bake a release branch from curated cherry-picks
#[derive(Debug, Parser)]
#[command(name = "cherrytree", version)]
pub struct Cli {
    /// Name of the deploy branch to create and force-push
    #[arg(value_name = "DEPLOY_BRANCH")]
    pub deploy_branch: String,

    /// Commit message for the outer workspace commit (defaults to 🍒)
    #[arg(value_name = "COMMIT_MSG")]
    pub commit_msg: Option<String>,

    /// Path to the build configuration file
    #[arg(long, default_value = "scripts/build.toml", value_name = "FILE")]
    pub config: PathBuf,

    /// Path to the outer workspace root
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub path: PathBuf,

    /// Show what would be done without running any git command
    #[arg(long)]
    pub dry_run: bool,

    /// Skip opening the PR comparison page in a browser
    #[arg(long)]
    pub no_open: bool,
}

/// Progress callback driving an indicatif spinner
pub struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    /// Create a spinner with a steady tick, ready for step messages.
    #[must_use]
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner }
    }

    /// Stop the spinner, replacing it with a final message.
    pub fn finish(&self, message: String) {
        self.spinner.finish_with_message(message);
    }

    /// Stop the spinner and clear its line.
    pub fn clear(&self) {
        self.spinner.finish_and_clear();
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressCallback for CliProgress {
    fn on_step(&self, message: &str) {
        self.spinner.set_message(message.to_string());
    }
}
