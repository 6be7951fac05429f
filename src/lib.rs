//! metaforge: benchmark metadata generator for bug-fix subjects.
//!
//! Provisions a working directory per recorded bug, invokes an external
//! analyzer to recover commit identifiers from its free-text output, and
//! aggregates one record per bug into a single `meta-data.json` document
//! consumed by downstream benchmark tooling.

pub mod aggregate;
pub mod cli;
pub mod error;
pub mod invoke;
pub mod manifest;
pub mod parse;
pub mod pipeline;
pub mod provision;
pub mod record;

// Re-export commonly used error types
pub use error::{AggregateError, ProvisionError};
