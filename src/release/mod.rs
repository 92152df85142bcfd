//! Release-branch builder
//!
//! Two-phase workflow for baking a deploy branch from curated cherries:
//! 1. Planning - pure description of the run from config + arguments
//! 2. Execution - perform the git operations in order, stop on first failure

mod execute;
mod plan;
mod progress;

pub use execute::{BuildOutcome, execute_build};
pub use plan::{
    BuildOptions, BuildPlan, COMPARE_URL_BASE, DEFAULT_COMMIT_MESSAGE, PUSH_REMOTE, REMOTES,
    RemoteSpec, SCRATCH_BRANCH, UPSTREAM_DIR, create_build_plan, remote_url,
};
pub use progress::{NoopProgress, ProgressCallback};
