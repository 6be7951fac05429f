//! Project manifest: the benchmark subjects and their recorded bug counts.
//!
//! The suite ships with a built-in subject list; a YAML manifest can
//! override it for custom runs.

use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One benchmark subject with a known number of recorded bugs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    /// Subject name, used both as directory name and `subject` field.
    pub name: String,
    /// Number of recorded bugs. Indices run from 1 up to (excluding) this.
    pub bug_count: u32,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>, bug_count: u32) -> Self {
        Self {
            name: name.into(),
            bug_count,
        }
    }

    /// 1-based bug indices for this subject. The upper bound is exclusive,
    /// so `bug_count = 3` yields indices 1 and 2.
    pub fn bug_indices(&self) -> Range<u32> {
        1..self.bug_count
    }
}

/// Ordered list of subjects for one generation run. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub projects: Vec<ProjectSpec>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Manifest {
    /// The built-in benchmark suite.
    pub fn builtin() -> Self {
        Self {
            projects: vec![
                ProjectSpec::new("Express", 27),
                ProjectSpec::new("Shields", 4),
                ProjectSpec::new("Bower", 3),
                ProjectSpec::new("Hexo", 12),
                ProjectSpec::new("Karma", 22),
                ProjectSpec::new("Hessian.js", 9),
                ProjectSpec::new("Eslint", 333),
                ProjectSpec::new("Node-redis", 7),
                ProjectSpec::new("Pencilblue", 7),
                ProjectSpec::new("Mongoose", 29),
            ],
        }
    }

    /// Load a manifest from a YAML file of the form
    /// `projects: [{name: ..., bug_count: ...}, ...]`.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?;
        let manifest: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse manifest {}", path.display()))?;
        Ok(manifest)
    }

    /// Total number of bug instances across all subjects.
    pub fn total_bugs(&self) -> usize {
        self.projects.iter().map(|p| p.bug_indices().len()).sum()
    }
}
