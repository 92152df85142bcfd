//! Shared test fixtures

#![allow(dead_code)]

pub mod mock_runner;

pub use mock_runner::MockRunner;

use cherrytree::config::{Cherry, ReleaseConfig};
use cherrytree::release::{BuildOptions, BuildPlan, create_build_plan};

/// Config with the given (sha, label) cherries on target "base", version 1.2.3.
pub fn sample_config(cherries: &[(&str, &str)]) -> ReleaseConfig {
    ReleaseConfig {
        target: "base".to_string(),
        cherries: cherries
            .iter()
            .map(|(sha, label)| Cherry {
                sha: (*sha).to_string(),
                label: (*label).to_string(),
            })
            .collect(),
        version: "1.2.3".to_string(),
    }
}

/// Plan for deploy branch "release-42" with the default commit message.
pub fn sample_plan(cherries: &[(&str, &str)]) -> BuildPlan {
    let options = BuildOptions {
        deploy_branch: "release-42".to_string(),
        commit_msg: None,
    };
    create_build_plan(&sample_config(cherries), &options)
}
