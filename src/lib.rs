//! cherrytree - pick cherries, bake release branches
//!
//! Library behind the `cherrytree` binary. Given a static configuration
//! (base branch, ordered cherries, version) and a deploy branch name, it
//! replays the cherries onto the base branch, squashes them into a single
//! version-titled commit, force-pushes the deploy branch, commits the outer
//! workspace, and hands back the PR-comparison URL.
//!
//! All external commands go through the injectable [`run::CommandRunner`]
//! seam, so the whole workflow is testable without touching a repository.

pub mod config;
pub mod error;
pub mod git;
pub mod release;
pub mod run;

pub use error::{Error, Result};
