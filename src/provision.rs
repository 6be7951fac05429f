//! Per-bug working directory provisioning.
//!
//! Creates `<workspace>/<project>/<project>-<index>/` and seeds it with the
//! four helper scripts the downstream harness expects.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::ProvisionError;

/// Helper scripts copied into every bug directory.
pub const HELPER_SCRIPTS: [&str; 4] = [
    "build_subject",
    "config_subject",
    "setup_subject",
    "test_subject",
];

/// Creates and seeds per-bug working directories.
#[derive(Debug, Clone)]
pub struct DirectoryProvisioner {
    workspace_dir: PathBuf,
    scripts_dir: PathBuf,
}

impl DirectoryProvisioner {
    pub fn new(workspace_dir: impl Into<PathBuf>, scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            workspace_dir: workspace_dir.into(),
            scripts_dir: scripts_dir.into(),
        }
    }

    /// Ensure `<project>/<project>-<index>/` exists under the workspace and
    /// copy the helper scripts into it, overwriting stale copies.
    ///
    /// Idempotent: re-provisioning an existing bug directory is not an
    /// error. A missing source script is fatal.
    pub fn provision(&self, project: &str, index: u32) -> Result<PathBuf, ProvisionError> {
        let project_dir = self.workspace_dir.join(project);
        fs::create_dir_all(&project_dir)?;

        let bug_dir = project_dir.join(format!("{project}-{index}"));
        fs::create_dir_all(&bug_dir)?;

        for script in HELPER_SCRIPTS {
            let src = self.scripts_dir.join(script);
            if !src.is_file() {
                return Err(ProvisionError::MissingHelperScript {
                    script: script.to_string(),
                    path: src,
                });
            }
            fs::copy(&src, bug_dir.join(script))?;
        }

        debug!(project, index, dir = %bug_dir.display(), "Provisioned bug directory");
        Ok(bug_dir)
    }
}
