//! Recommendation extraction from assistant replies

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{HEADING_DELIMITER, RECOMMENDATION_PREFIXES, sanitize};

/// One parsed suggestion from a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    /// Sanitized heading, never empty
    pub heading: String,

    /// Trimmed description, never empty
    pub description: String,

    /// Index within the extracted batch
    pub position: usize,
}

/// Parse every well-formed recommendation line in a reply
///
/// A line qualifies when it starts with one of the lettered prefixes and
/// contains the heading delimiter; it is split at the first delimiter.
/// Anything else is skipped, so a single malformed line never costs the
/// rest of the batch.
///
/// Extra delimiters stay in the description, and a line whose description
/// is blank yields no record.
pub fn extract(reply: &str) -> Vec<RecommendationRecord> {
    debug!(reply_len = reply.len(), "extract: called");
    let mut records = Vec::new();

    for line in reply.lines() {
        if !RECOMMENDATION_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
            continue;
        }

        let Some((raw_heading, raw_description)) = line.split_once(HEADING_DELIMITER) else {
            debug!(%line, "extract: prefix without delimiter, skipping");
            continue;
        };

        let heading = sanitize(raw_heading.trim());
        let description = raw_description.trim();
        if heading.is_empty() || description.is_empty() {
            debug!(%line, "extract: empty heading or description, skipping");
            continue;
        }

        records.push(RecommendationRecord {
            heading,
            description: description.to_string(),
            position: records.len(),
        });
    }

    debug!(count = records.len(), "extract: done");
    records
}
