//! Heading match value object

use serde::{Deserialize, Serialize};

/// Value Object: a line recognized as a heading by a detection rule
///
/// Produced by the rule engine for a single line. The `rule_name` becomes the
/// chunk type of the chunk opened by this heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingMatch {
    /// Hierarchy depth (1 = top)
    pub level: usize,
    /// Name of the rule that claimed the line
    pub rule_name: String,
    /// The heading line as written, trimmed
    pub raw_title: String,
    /// Normalized title text without markers or numbering
    pub clean_title: String,
}

impl HeadingMatch {
    /// Create a new heading match
    pub fn new(
        level: usize,
        rule_name: impl Into<String>,
        raw_title: impl Into<String>,
        clean_title: impl Into<String>,
    ) -> Self {
        Self {
            level,
            rule_name: rule_name.into(),
            raw_title: raw_title.into(),
            clean_title: clean_title.into(),
        }
    }
}
