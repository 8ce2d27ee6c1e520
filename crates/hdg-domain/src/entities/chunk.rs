//! Chunk node entity
//!
//! A node of the heading-derived chunk tree. Nodes are immutable values:
//! every update (content flush, split, overlap, keyword enrichment) produces
//! a new node through one of the `with_*` methods, and the caller replaces
//! the old value keyed by identifier.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    CONTENT_SEPARATOR, ROOT_CHUNK_TYPE, ROOT_LEVEL, SPLIT_CHUNK_TYPE, part_suffix,
};
use crate::value_objects::HeadingMatch;

/// Generate a process-unique identifier
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Entity: a heading-rooted unit of document content
///
/// ## Business Rules
///
/// - `id` is assigned at creation and never changes
/// - `level` is strictly greater than the parent's level
/// - `content` is an owned copy of the body text under the heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkNode {
    id: String,
    parent_id: Option<String>,
    level: usize,
    chunk_type: String,
    raw_title: String,
    clean_title: String,
    content: String,
    keywords: Vec<String>,
}

impl ChunkNode {
    /// Synthetic root seeded at the bottom of the context stack
    pub fn root() -> Self {
        Self {
            id: new_id(),
            parent_id: None,
            level: ROOT_LEVEL,
            chunk_type: ROOT_CHUNK_TYPE.to_string(),
            raw_title: String::new(),
            clean_title: String::new(),
            content: String::new(),
            keywords: Vec::new(),
        }
    }

    /// Open a new chunk for a heading under the given parent
    pub fn from_heading(heading: &HeadingMatch, parent_id: Option<String>) -> Self {
        Self {
            id: new_id(),
            parent_id,
            level: heading.level,
            chunk_type: heading.rule_name.clone(),
            raw_title: heading.raw_title.clone(),
            clean_title: heading.clean_title.clone(),
            content: String::new(),
            keywords: Vec::new(),
        }
    }

    /// Unique identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identifier of the nearest enclosing chunk
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// Hierarchy depth (1 = top)
    pub fn level(&self) -> usize {
        self.level
    }

    /// Name of the rule that produced the chunk, or `split`
    pub fn chunk_type(&self) -> &str {
        &self.chunk_type
    }

    /// Heading text as matched
    pub fn raw_title(&self) -> &str {
        &self.raw_title
    }

    /// Normalized heading text
    pub fn clean_title(&self) -> &str {
        &self.clean_title
    }

    /// Body text owned by the chunk
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content length in characters
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Keywords attached by enrichment
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether this is the synthetic root
    pub fn is_root(&self) -> bool {
        self.level == ROOT_LEVEL && self.chunk_type == ROOT_CHUNK_TYPE
    }

    /// Whether this chunk was produced by constraint splitting
    pub fn is_split_fragment(&self) -> bool {
        self.chunk_type == SPLIT_CHUNK_TYPE
    }

    /// Copy with body text appended, blank-line-joined to existing content
    pub fn with_appended_content(&self, text: &str) -> Self {
        let content = if self.content.is_empty() {
            text.to_string()
        } else {
            format!("{}{CONTENT_SEPARATOR}{text}", self.content)
        };
        self.with_content(content)
    }

    /// Copy with the content replaced
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    /// Copy with `prefix` placed before the content, separated by a blank line
    pub fn with_prefix(&self, prefix: &str) -> Self {
        if self.content.is_empty() {
            return self.with_content(prefix);
        }
        self.with_content(format!("{prefix}{CONTENT_SEPARATOR}{}", self.content))
    }

    /// Copy with the keyword list replaced
    pub fn with_keywords(&self, keywords: Vec<String>) -> Self {
        Self {
            keywords,
            ..self.clone()
        }
    }

    /// Fragment `part` (>= 2) of this chunk: new id, `split` type, suffixed titles
    pub fn fragment(&self, part: usize, content: impl Into<String>) -> Self {
        let suffix = part_suffix(part);
        Self {
            id: new_id(),
            parent_id: self.parent_id.clone(),
            level: self.level,
            chunk_type: SPLIT_CHUNK_TYPE.to_string(),
            raw_title: format!("{}{suffix}", self.raw_title),
            clean_title: format!("{}{suffix}", self.clean_title),
            content: content.into(),
            keywords: self.keywords.clone(),
        }
    }
}
