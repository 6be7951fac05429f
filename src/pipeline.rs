//! End-to-end generation pipeline: provision, analyze, parse, aggregate.
//!
//! Fully sequential, project-major then bug-index-minor. The only operation
//! that suspends the pipeline is the analyzer invocation, which blocks with
//! no timeout. There are no retries anywhere: a failed or empty invocation
//! yields sentinel-valued fields and the run moves on.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::aggregate::{MetadataAggregator, DEFAULT_OUTPUT_FILE};
use crate::invoke::{AnalyzerCommand, ToolInvoker};
use crate::manifest::Manifest;
use crate::parse::parse_identifiers;
use crate::provision::DirectoryProvisioner;

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root under which `<project>/<project>-<n>/` trees are created.
    pub workspace_dir: PathBuf,
    /// Directory holding the four helper scripts.
    pub scripts_dir: PathBuf,
    /// Destination of the aggregated document.
    pub output_path: PathBuf,
    pub analyzer: AnalyzerCommand,
    pub manifest: Manifest,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            workspace_dir: PathBuf::from("."),
            scripts_dir: PathBuf::from("."),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            analyzer: AnalyzerCommand::default(),
            manifest: Manifest::builtin(),
        }
    }
}

/// Summary returned to the CLI after a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub projects: usize,
    pub records: usize,
    pub output_path: String,
}

/// Drives the full double loop over projects and bug indices.
pub struct GeneratorPipeline {
    config: GeneratorConfig,
}

impl GeneratorPipeline {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Process every bug of every project, then write the metadata
    /// document exactly once.
    ///
    /// A missing helper script aborts the run before anything is written;
    /// analyzer failures degrade the affected record instead.
    pub async fn run(&self) -> Result<RunSummary> {
        let provisioner =
            DirectoryProvisioner::new(&self.config.workspace_dir, &self.config.scripts_dir);
        let invoker = ToolInvoker::new(self.config.analyzer.clone());
        let mut aggregator = MetadataAggregator::new();

        for project in &self.config.manifest.projects {
            info!(
                project = %project.name,
                bugs = project.bug_indices().len(),
                "Processing project"
            );

            for index in project.bug_indices() {
                provisioner.provision(&project.name, index)?;

                let output = invoker.run(&project.name, index).await;
                // Raw analyzer output goes to stdout for human inspection.
                println!("{output}");

                let parsed = parse_identifiers(&output);
                // The URL is informational only; it never reaches the document.
                debug!(
                    project = %project.name,
                    index,
                    github_url = %parsed.github_url,
                    "Parsed analyzer output"
                );

                let id = aggregator.append(&project.name, index, &parsed);
                debug!(id, bug_id = %format!("{}-{}", project.name, index), "Record appended");
            }
        }

        aggregator.write(&self.config.output_path)?;

        Ok(RunSummary {
            projects: self.config.manifest.projects.len(),
            records: aggregator.len(),
            output_path: self.config.output_path.display().to_string(),
        })
    }
}
