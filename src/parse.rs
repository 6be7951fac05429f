//! Marker-based parsing of analyzer output.
//!
//! The analyzer prints free text containing up to three labeled markers.
//! A single forward scan extracts them; any absent marker leaves the
//! `"N/A"` sentinel in place.

/// Placeholder recorded when a marker is absent from the analyzer output.
pub const SENTINEL: &str = "N/A";

const FIX_MARKER: &str = "Revision id";
const BUG_MARKER: &str = "Buggy id";
const URL_MARKER: &str = "Github URL";

/// Commit identifiers recovered from one analyzer run.
///
/// Every field is always populated, even on total parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentifiers {
    /// Commit that fixes the bug.
    pub fix_commit: String,
    /// Commit that introduced (or exhibits) the bug.
    pub bug_commit: String,
    /// Repository URL. Parsed for inspection only; not persisted in the
    /// metadata document.
    pub github_url: String,
}

impl Default for ParsedIdentifiers {
    fn default() -> Self {
        Self {
            fix_commit: SENTINEL.to_string(),
            bug_commit: SENTINEL.to_string(),
            github_url: SENTINEL.to_string(),
        }
    }
}

/// Scan analyzer output for the three markers.
///
/// `Revision id` and `Buggy id` take the line after the marker, trimmed;
/// `Github URL` takes everything after the first colon on the marker line,
/// trimmed. When a marker repeats, the later occurrence wins. A marker on
/// the final line with nothing following it leaves its field untouched.
pub fn parse_identifiers(output: &str) -> ParsedIdentifiers {
    let mut parsed = ParsedIdentifiers::default();
    let lines: Vec<&str> = output.split('\n').collect();

    for (i, line) in lines.iter().enumerate() {
        if line.starts_with(FIX_MARKER) {
            if let Some(next) = lines.get(i + 1) {
                parsed.fix_commit = next.trim().to_string();
            }
        }
        if line.starts_with(BUG_MARKER) {
            if let Some(next) = lines.get(i + 1) {
                parsed.bug_commit = next.trim().to_string();
            }
        }
        if line.starts_with(URL_MARKER) {
            if let Some((_, rest)) = line.split_once(':') {
                parsed.github_url = rest.trim().to_string();
            }
        }
    }

    parsed
}
