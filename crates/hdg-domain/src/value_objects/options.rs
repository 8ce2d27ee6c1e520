//! Processing option value objects
//!
//! Options that feed the constraint processor and the enrichment stage.
//! All of them are validated before any document is processed; an invalid
//! value is a construction-time failure, never a silent fallback.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::{
    DEFAULT_CHUNK_OVERLAP, DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MAX_KEYWORDS_PER_CHUNK,
    DEFAULT_MIN_CHUNK_SIZE,
};
use crate::error::{Error, Result};

/// Which chunking pipeline processes a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkingStrategy {
    /// Heading-only chunking driven by the rule engine
    #[default]
    Headings,
    /// Heading chunking plus the block-level structural graph
    Structural,
}

impl ChunkingStrategy {
    /// Whether this strategy produces a structural graph
    pub fn supports_structural_graph(self) -> bool {
        matches!(self, Self::Structural)
    }
}

/// Size and overlap constraints applied after hierarchy building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_constraint_bounds"))]
pub struct ConstraintOptions {
    /// Maximum chunk content length in characters
    #[validate(range(min = 1, message = "max_chunk_size must be positive"))]
    pub max_chunk_size: usize,
    /// Minimum chunk content length in characters
    pub min_chunk_size: usize,
    /// Characters copied from the tail of a chunk into its successor
    pub chunk_overlap: usize,
    /// Leave undersized chunks in place instead of merging them
    pub preserve_structure: bool,
    /// Split along sentence boundaries instead of word boundaries
    pub split_on_sentences: bool,
}

impl Default for ConstraintOptions {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            preserve_structure: true,
            split_on_sentences: true,
        }
    }
}

impl ConstraintOptions {
    /// Create options with the given maximum size and defaults elsewhere
    pub fn with_max_size(max_chunk_size: usize) -> Self {
        Self {
            max_chunk_size,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE.min(max_chunk_size),
            ..Self::default()
        }
    }

    /// Set the overlap
    pub fn with_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    /// Set the minimum size
    pub fn with_min_size(mut self, min_chunk_size: usize) -> Self {
        self.min_chunk_size = min_chunk_size;
        self
    }

    /// Choose sentence (true) or word (false) splitting
    pub fn with_sentence_splitting(mut self, split_on_sentences: bool) -> Self {
        self.split_on_sentences = split_on_sentences;
        self
    }

    /// Validate and convert failures into a domain configuration error
    pub fn ensure_valid(&self) -> Result<()> {
        self.validate().map_err(|e| {
            Error::configuration_with_source(format!("Invalid chunk constraints: {e}"), e)
        })
    }
}

fn validate_constraint_bounds(options: &ConstraintOptions) -> std::result::Result<(), ValidationError> {
    if options.min_chunk_size > options.max_chunk_size {
        return Err(ValidationError::new("chunk_bounds").with_message(Cow::from(format!(
            "min_chunk_size ({}) cannot exceed max_chunk_size ({})",
            options.min_chunk_size, options.max_chunk_size
        ))));
    }
    if options.max_chunk_size > 0 && options.chunk_overlap >= options.max_chunk_size {
        return Err(ValidationError::new("chunk_overlap").with_message(Cow::from(format!(
            "chunk_overlap ({}) must be smaller than max_chunk_size ({})",
            options.chunk_overlap, options.max_chunk_size
        ))));
    }
    Ok(())
}

/// Keywords injected into chunks whose title path matches a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SectionKeywords {
    /// Regex tested against the clean titles of a chunk and its ancestors
    #[validate(
        length(min = 1, message = "Section pattern cannot be empty"),
        custom(function = "validate_pattern", message = "Invalid section pattern")
    )]
    pub pattern: String,
    /// Keywords appended when the pattern matches
    #[serde(default)]
    pub keywords: Vec<String>,
}

fn validate_pattern(pattern: &str) -> std::result::Result<(), ValidationError> {
    regex::Regex::new(pattern)
        .map(|_| ())
        .map_err(|_| ValidationError::new("Section pattern does not compile"))
}

/// Keyword enrichment options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct KeywordOptions {
    /// Call the keyword collaborator for each chunk
    #[serde(default)]
    pub extract_keywords: bool,
    /// Cap applied to the collaborator's result
    #[validate(range(min = 1, message = "max_keywords_per_chunk must be positive"))]
    pub max_keywords_per_chunk: usize,
    /// Keywords added to every chunk
    #[serde(default)]
    pub custom_keywords: Vec<String>,
    /// Keywords added to chunks under matching sections
    #[serde(default)]
    #[validate(nested)]
    pub section_keywords: Vec<SectionKeywords>,
}

impl Default for KeywordOptions {
    fn default() -> Self {
        Self {
            extract_keywords: false,
            max_keywords_per_chunk: DEFAULT_MAX_KEYWORDS_PER_CHUNK,
            custom_keywords: Vec::new(),
            section_keywords: Vec::new(),
        }
    }
}

impl KeywordOptions {
    /// Whether any keyword source is active
    pub fn is_active(&self) -> bool {
        self.extract_keywords || !self.custom_keywords.is_empty() || !self.section_keywords.is_empty()
    }
}

/// Complete option set for one document processing call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    /// Constraint pass settings; `None` skips the pass entirely
    pub constraints: Option<ConstraintOptions>,
    /// Keyword enrichment settings
    #[serde(default)]
    pub keywords: KeywordOptions,
    /// Vectorize each chunk with the embedding collaborator
    #[serde(default)]
    pub embeddings: bool,
}

impl ProcessingOptions {
    /// Validate every section of the options
    pub fn validate(&self) -> Result<()> {
        if let Some(constraints) = &self.constraints {
            constraints.ensure_valid()?;
        }
        self.keywords
            .validate()
            .map_err(|e| Error::configuration_with_source("Invalid keyword options", e))
    }
}
