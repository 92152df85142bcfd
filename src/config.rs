//! Release configuration: which cherries to pick, onto what, titled how.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single source commit slated for replay onto the target branch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cherry {
    /// Commit id (hex) to cherry-pick
    pub sha: String,
    /// Human-readable label shown while the cherry is placed
    pub label: String,
}

/// Static configuration for one release build
///
/// Loaded once at process start and read-only for the run's duration.
/// Cherry order is replay order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseConfig {
    /// Base branch the cherries are replayed onto
    pub target: String,
    /// Ordered list of cherries to replay
    #[serde(default)]
    pub cherries: Vec<Cherry>,
    /// Version string used as the squash commit message
    pub version: String,
}

impl ReleaseConfig {
    /// Validate field contents beyond what deserialization enforces.
    ///
    /// Rejects empty `target`/`version` and cherries with an empty sha,
    /// so a malformed file fails before any repository mutation begins.
    pub fn validate(&self) -> Result<()> {
        if self.target.trim().is_empty() {
            return Err(Error::Config("`target` must not be empty".to_string()));
        }
        if self.version.trim().is_empty() {
            return Err(Error::Config("`version` must not be empty".to_string()));
        }
        for (idx, cherry) in self.cherries.iter().enumerate() {
            if cherry.sha.trim().is_empty() {
                return Err(Error::Config(format!(
                    "cherry #{} ({:?}) has an empty sha",
                    idx + 1,
                    cherry.label
                )));
            }
        }
        Ok(())
    }

    /// Bump the final dotted segment of the version, if it is numeric.
    ///
    /// `"1.2.3"` yields `Some("1.2.4")`; a non-numeric suffix yields `None`.
    /// Display-only hint for the operator, never written anywhere.
    #[must_use]
    pub fn next_patch_version(&self) -> Option<String> {
        let (prefix, last) = self.version.rsplit_once('.')?;
        let bumped = last.parse::<u64>().ok()?.checked_add(1)?;
        Some(format!("{prefix}.{bumped}"))
    }
}

/// Load and validate a release configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ReleaseConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: ReleaseConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    config.validate()?;
    Ok(config)
}
