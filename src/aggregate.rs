//! In-memory record aggregation and one-shot document serialization.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::AggregateError;
use crate::parse::ParsedIdentifiers;
use crate::record::MetadataRecord;

/// Default output filename for the aggregated document.
pub const DEFAULT_OUTPUT_FILE: &str = "meta-data.json";

/// Collects one record per bug instance and serializes them exactly once
/// at the end of the run.
///
/// Owns the id counter: ids are assigned in append order, 1-based and
/// contiguous across projects, so no global counter floats around.
#[derive(Debug, Default)]
pub struct MetadataAggregator {
    records: Vec<MetadataRecord>,
}

impl MetadataAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and append the record for one bug, assigning the next
    /// sequential id. Returns the assigned id.
    pub fn append(&mut self, subject: &str, index: u32, parsed: &ParsedIdentifiers) -> u64 {
        let id = self.records.len() as u64 + 1;
        self.records
            .push(MetadataRecord::build(id, subject, index, parsed));
        id
    }

    pub fn records(&self) -> &[MetadataRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize all records as a pretty-printed JSON array and write them
    /// in a single call, overwriting any prior document.
    ///
    /// This runs once per run, after every bug has been processed; an
    /// interrupted run leaves no partially-written document behind.
    pub fn write(&self, path: &Path) -> Result<(), AggregateError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, json)?;
        info!(records = self.records.len(), path = %path.display(), "Metadata document written");
        Ok(())
    }
}
