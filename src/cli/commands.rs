//! CLI command definitions for metaforge.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::aggregate::DEFAULT_OUTPUT_FILE;
use crate::invoke::AnalyzerCommand;
use crate::manifest::Manifest;
use crate::pipeline::{GeneratorConfig, GeneratorPipeline};

/// Default analyzer command line, invoked per bug with `-p <project> -i <index>`.
const DEFAULT_ANALYZER: &str = "python3 main.py";

/// Benchmark metadata generator for bug-fix subjects.
#[derive(Parser)]
#[command(name = "metaforge")]
#[command(about = "Provision per-bug workspaces and aggregate commit metadata")]
#[command(version)]
#[command(
    long_about = "metaforge provisions a <project>/<project>-<n>/ working directory per recorded bug,\nruns an external analyzer once per bug to recover commit identifiers, and writes\nall records as a single meta-data.json document.\n\nExample usage:\n  metaforge generate --scripts-dir . --output meta-data.json"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate the metadata document for all subjects in the manifest.
    #[command(alias = "gen")]
    Generate(GenerateArgs),
}

/// Arguments for `metaforge generate`.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// YAML manifest listing subjects and bug counts. Defaults to the
    /// built-in benchmark suite.
    #[arg(short = 'M', long)]
    pub manifest: Option<PathBuf>,

    /// Directory containing the four helper scripts seeded into each bug
    /// directory.
    #[arg(long, default_value = ".")]
    pub scripts_dir: PathBuf,

    /// Root directory under which <project>/<project>-<n>/ trees are created.
    #[arg(short = 'w', long, default_value = ".")]
    pub workspace: PathBuf,

    /// Output path for the aggregated metadata document.
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Analyzer command line; `-p <project> -i <index>` is appended per bug.
    #[arg(short = 't', long, default_value = DEFAULT_ANALYZER)]
    pub tool: String,

    /// Print the run summary as JSON.
    #[arg(short = 'j', long)]
    pub json: bool,
}

/// Parse CLI arguments from the process environment.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parse arguments and run the selected command.
pub async fn run() -> Result<()> {
    run_with_cli(parse_cli()).await
}

/// Run the selected command with already-parsed arguments.
pub async fn run_with_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => generate(args).await,
    }
}

async fn generate(args: GenerateArgs) -> Result<()> {
    let manifest = match &args.manifest {
        Some(path) => Manifest::from_yaml_file(path)?,
        None => Manifest::builtin(),
    };
    let analyzer = AnalyzerCommand::parse(&args.tool)
        .ok_or_else(|| anyhow::anyhow!("analyzer command line is empty"))?;

    info!(
        projects = manifest.projects.len(),
        total_bugs = manifest.total_bugs(),
        "Starting metadata generation"
    );

    let config = GeneratorConfig {
        workspace_dir: args.workspace,
        scripts_dir: args.scripts_dir,
        output_path: args.output,
        analyzer,
        manifest,
    };
    let summary = GeneratorPipeline::new(config).run().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Generated {} records across {} projects -> {}",
            summary.records, summary.projects, summary.output_path
        );
    }
    Ok(())
}
