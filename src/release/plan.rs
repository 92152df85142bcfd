//! Build planning - pure functions for creating release build plans
//!
//! No I/O happens here; a [`BuildPlan`] is plain data describing one run,
//! created from the loaded configuration and the CLI arguments. Execution
//! lives in [`crate::release::execute`].

use crate::config::{Cherry, ReleaseConfig};

/// Remotes ensured to exist in the inner checkout before fetching
pub const REMOTES: &[&str] = &["lyft", "apache", "hughhhh"];

/// Remote the deploy branch is force-pushed to
pub const PUSH_REMOTE: &str = "lyft";

/// Disposable branch the cherries are staged on before squashing
pub const SCRATCH_BRANCH: &str = "temp-branch";

/// Subdirectory holding the inner checkout, relative to the workspace root
pub const UPSTREAM_DIR: &str = "upstream";

/// Default commit message for the outer workspace commit
pub const DEFAULT_COMMIT_MESSAGE: &str = "🍒";

/// Base of the PR-comparison URL opened at the end of a run
pub const COMPARE_URL_BASE: &str = "https://github.com/lyft/superset-private/compare";

/// SSH URL for one of the fixed remotes.
#[must_use]
pub fn remote_url(name: &str) -> String {
    format!("git@github.com:{name}/incubator-superset.git")
}

/// A named remote to register in the inner checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSpec {
    /// Remote name
    pub name: String,
    /// Remote URL
    pub url: String,
}

/// Options supplied on the command line
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Name of the deploy branch to create and force-push
    pub deploy_branch: String,
    /// Commit message for the outer workspace commit (defaults to 🍒)
    pub commit_msg: Option<String>,
}

/// Pure description of one release build
///
/// Created by [`create_build_plan`] and executed by
/// [`crate::release::execute_build`].
#[derive(Debug, Clone)]
pub struct BuildPlan {
    /// Base branch the cherries are replayed onto
    pub base_branch: String,
    /// Disposable staging branch
    pub scratch_branch: String,
    /// Final published branch
    pub deploy_branch: String,
    /// Cherries to replay, in order
    pub cherries: Vec<Cherry>,
    /// Squash commit message (the configured version string)
    pub squash_message: String,
    /// Remotes to register before fetching
    pub remotes: Vec<RemoteSpec>,
    /// Remote the deploy branch is force-pushed to
    pub push_remote: String,
    /// Commit message for the outer workspace commit
    pub workspace_message: String,
}

impl BuildPlan {
    /// Number of commits the soft reset walks back - always the cherry count.
    #[must_use]
    pub fn squash_depth(&self) -> usize {
        self.cherries.len()
    }

    /// PR-comparison URL for the given outer branch.
    #[must_use]
    pub fn compare_url(&self, outer_branch: &str) -> String {
        format!("{COMPARE_URL_BASE}/{outer_branch}")
    }

    /// Ordered human-readable step descriptions, for dry-run output.
    #[must_use]
    pub fn describe_steps(&self) -> Vec<String> {
        let mut steps = vec!["update submodules".to_string()];
        for remote in &self.remotes {
            steps.push(format!("add remote {} ({})", remote.name, remote.url));
        }
        steps.push("fetch all remotes".to_string());
        steps.push(format!("checkout base branch {}", self.base_branch));
        steps.push(format!(
            "recreate scratch branch {} from {}",
            self.scratch_branch, self.base_branch
        ));
        for cherry in &self.cherries {
            steps.push(format!("cherry-pick {} ({})", cherry.sha, cherry.label));
        }
        steps.push(format!(
            "squash {} cherries into one commit titled {:?}",
            self.squash_depth(),
            self.squash_message
        ));
        steps.push(format!(
            "recreate deploy branch {} and force-push to {}",
            self.deploy_branch, self.push_remote
        ));
        steps.push(format!(
            "commit outer workspace ({:?}) and push to origin",
            self.workspace_message
        ));
        steps.push("open PR comparison page".to_string());
        steps
    }
}

/// Create a build plan (PURE - no I/O, easily testable)
#[must_use]
pub fn create_build_plan(config: &ReleaseConfig, options: &BuildOptions) -> BuildPlan {
    BuildPlan {
        base_branch: config.target.clone(),
        scratch_branch: SCRATCH_BRANCH.to_string(),
        deploy_branch: options.deploy_branch.clone(),
        cherries: config.cherries.clone(),
        squash_message: config.version.clone(),
        remotes: REMOTES
            .iter()
            .map(|name| RemoteSpec {
                name: (*name).to_string(),
                url: remote_url(name),
            })
            .collect(),
        push_remote: PUSH_REMOTE.to_string(),
        workspace_message: options
            .commit_msg
            .clone()
            .unwrap_or_else(|| DEFAULT_COMMIT_MESSAGE.to_string()),
    }
}
