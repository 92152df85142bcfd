//! Build execution - effectful operations
//!
//! Walks a [`BuildPlan`] step by step against the real repository, via the
//! injectable command runner. Strictly sequential; the first fatal step
//! aborts the run and leaves the working tree exactly as git left it (a
//! cherry-pick conflict stays in place for manual resolution).

use crate::error::Result;
use crate::git::GitClient;
use crate::release::plan::{BuildPlan, UPSTREAM_DIR};
use crate::release::progress::ProgressCallback;
use crate::run::CommandRunner;
use std::path::Path;

/// Result of a completed build
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Deploy branch that was force-pushed
    pub deploy_branch: String,
    /// Branch name of the outer workspace
    pub outer_branch: String,
    /// PR-comparison URL for the outer branch
    pub compare_url: String,
    /// How many cherries were replayed and squashed
    pub cherries_applied: usize,
}

/// Execute the build plan (EFFECTFUL)
///
/// Runs the full sequence: submodule update, remote setup, fetch, base
/// checkout, cherry-pick replay, squash, deploy-branch force-push, outer
/// workspace commit and push. Stops at the first fatal failure.
///
/// The browser launch is deliberately not part of execution; callers open
/// [`BuildOutcome::compare_url`] themselves.
pub fn execute_build(
    plan: &BuildPlan,
    runner: &dyn CommandRunner,
    workspace_root: &Path,
    progress: &dyn ProgressCallback,
) -> Result<BuildOutcome> {
    let outer = GitClient::new(runner, workspace_root);
    let upstream = GitClient::new(runner, workspace_root.join(UPSTREAM_DIR));

    progress.on_step("Checking out changes");
    outer.update_submodules()?;

    for remote in &plan.remotes {
        progress.on_step(&format!("Adding remote {}", remote.name));
        upstream.add_remote(&remote.name, &remote.url)?;
    }

    progress.on_step("Fetching all branches...");
    upstream.fetch_all()?;

    progress.on_step("Checking out base branch...");
    upstream.checkout(&plan.base_branch)?;

    upstream.delete_branch(&plan.scratch_branch)?;
    upstream.create_branch(&plan.scratch_branch)?;

    for cherry in &plan.cherries {
        progress.on_step(&format!("Placing 🍒 : {}", cherry.label));
        upstream.cherry_pick(&cherry.sha)?;
    }

    // Squash: walk back over the replayed cherries, keeping their combined
    // tree staged, then commit once with the version as the message.
    progress.on_step("Squashing cherries...");
    upstream.reset_soft(plan.squash_depth())?;
    upstream.commit(&plan.squash_message)?;

    progress.on_step("Delete deploy branch if already exist");
    upstream.delete_branch(&plan.deploy_branch)?;

    progress.on_step("checking out fresh branch...");
    upstream.create_branch(&plan.deploy_branch)?;

    progress.on_step("Push branch up to github 🚀");
    upstream.push_force(&plan.push_remote, &plan.deploy_branch)?;

    progress.on_step("Committing outer workspace...");
    let outer_branch = outer.current_branch()?;
    outer.stage_all()?;
    outer.commit(&plan.workspace_message)?;
    outer.push("origin", &outer_branch)?;

    let compare_url = plan.compare_url(&outer_branch);
    Ok(BuildOutcome {
        deploy_branch: plan.deploy_branch.clone(),
        outer_branch,
        compare_url,
        cherries_applied: plan.squash_depth(),
    })
}
