//! Command-line interface for metaforge.
//!
//! Provides the `generate` command that runs the full provisioning and
//! metadata aggregation pipeline.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, Cli, Commands};
