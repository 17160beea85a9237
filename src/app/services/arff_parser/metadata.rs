//! ARFF header metadata extraction
//!
//! Pulls the relation name and ordered attribute names out of the header
//! portion of a file. Extraction never fails: unreadable declarations are
//! skipped, and missing ones leave the defaults in place.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::app::models::DatasetMetadata;
use crate::constants::{
    ATTRIBUTE_MARKER, DATA_MARKER, RELATION_MARKER, is_blank_or_comment, line_has_marker,
    strip_name_quotes,
};

fn relation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^@relation\s+(.+)").expect("pattern compiles"))
}

fn quoted_attribute_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)^@attribute\s+['"]([^'"]+)['"]"#).expect("pattern compiles")
    })
}

fn unquoted_attribute_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)^@attribute\s+([^'"{}\s]+)"#).expect("pattern compiles")
    })
}

/// Extract relation and attribute names from the header portion of a file
///
/// Scans until the first `@data` line. Blank lines and `%` comments are
/// skipped; declarations that match no known pattern are logged and skipped
/// without failing the extraction.
pub fn extract_metadata(content: &str) -> DatasetMetadata {
    let mut metadata = DatasetMetadata::default();

    for raw_line in content.lines() {
        let line = raw_line.trim();

        if is_blank_or_comment(line) {
            continue;
        }
        if line_has_marker(line, DATA_MARKER) {
            break;
        }

        if line_has_marker(line, RELATION_MARKER) {
            if let Some(name) = relation_pattern()
                .captures(line)
                .and_then(|captures| captures.get(1))
            {
                metadata.relation = strip_name_quotes(name.as_str()).to_string();
            }
        } else if line_has_marker(line, ATTRIBUTE_MARKER) {
            match extract_attribute_name(line) {
                Some(name) => metadata.attributes.push(name),
                None => debug!("Could not extract an attribute name from: {}", line),
            }
        }
        // Anything else in the header is ignored
    }

    debug!(
        "Extracted metadata: relation='{}', {} attributes",
        metadata.relation,
        metadata.attribute_count()
    );

    metadata
}

/// Extract the name token following an `@attribute` marker
///
/// The quoted form wins so names containing spaces survive intact; the
/// unquoted form stops at whitespace, quotes, or braces.
fn extract_attribute_name(line: &str) -> Option<String> {
    if let Some(name) = quoted_attribute_pattern()
        .captures(line)
        .and_then(|captures| captures.get(1))
    {
        return Some(name.as_str().trim().to_string());
    }

    unquoted_attribute_pattern()
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str().to_string())
}
