//! Metadata record schema.
//!
//! One record per bug instance, with the exact field set the downstream
//! benchmark harness consumes. Fields this generator cannot derive (test
//! identifiers, line ranges, dependencies) stay at empty defaults for a
//! later enrichment stage.

use serde::{Deserialize, Serialize};

use crate::parse::ParsedIdentifiers;

/// Per-test timeout recorded for every subject.
pub const TEST_TIMEOUT: u32 = 5;

/// Implementation language recorded for every subject.
pub const SUBJECT_LANGUAGE: &str = "python";

/// Helper script names recorded in every record.
pub const BUILD_SCRIPT: &str = "build_subject";
pub const CONFIG_SCRIPT: &str = "config_subject";
pub const CLEAN_SCRIPT: &str = "clean_subject";
pub const TEST_SCRIPT: &str = "test_subject";

/// One entry of the aggregated metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// 1-based sequential id, contiguous across the whole run.
    pub id: u64,
    /// Subject (project) name.
    pub subject: String,
    /// `<subject>-<index>`, unique across the document.
    pub bug_id: String,
    pub test_timeout: u32,
    pub language: String,
    pub build_script: String,
    pub config_script: String,
    pub clean_script: String,
    pub test_script: String,
    pub passing_test_identifiers: Vec<String>,
    pub count_pos: u32,
    pub failing_test_identifiers: Vec<String>,
    pub count_neg: u32,
    /// Parsed commit identifier or `"N/A"`.
    pub bug_commit: String,
    /// Parsed commit identifier or `"N/A"`.
    pub fix_commit: String,
    pub line_numbers: Vec<u32>,
    pub dependencies: Vec<String>,
}

impl MetadataRecord {
    /// Shape one record from a subject, bug index, parsed identifiers and
    /// the next sequential id. Pure data shaping; cannot fail.
    pub fn build(id: u64, subject: &str, index: u32, parsed: &ParsedIdentifiers) -> Self {
        Self {
            id,
            subject: subject.to_string(),
            bug_id: format!("{subject}-{index}"),
            test_timeout: TEST_TIMEOUT,
            language: SUBJECT_LANGUAGE.to_string(),
            build_script: BUILD_SCRIPT.to_string(),
            config_script: CONFIG_SCRIPT.to_string(),
            clean_script: CLEAN_SCRIPT.to_string(),
            test_script: TEST_SCRIPT.to_string(),
            passing_test_identifiers: Vec::new(),
            count_pos: 0,
            failing_test_identifiers: Vec::new(),
            count_neg: 0,
            bug_commit: parsed.bug_commit.clone(),
            fix_commit: parsed.fix_commit.clone(),
            line_numbers: Vec::new(),
            dependencies: Vec::new(),
        }
    }
}
