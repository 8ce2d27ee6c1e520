//! Chunking configuration types

use hdg_domain::constants::{DEFAULT_CHUNK_OVERLAP, DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MIN_CHUNK_SIZE};
use hdg_domain::value_objects::{ChunkingStrategy, ConstraintOptions};
use serde::{Deserialize, Serialize};

/// Chunking configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Pipeline to run: `headings` or `structural`
    pub strategy: ChunkingStrategy,

    /// Run the constraint pass after hierarchy building
    pub enforce_constraints: bool,

    /// Maximum chunk content length in characters
    pub max_chunk_size: usize,

    /// Minimum chunk content length in characters
    pub min_chunk_size: usize,

    /// Characters copied from the tail of a chunk into its successor
    pub chunk_overlap: usize,

    /// Leave undersized chunks in place
    pub preserve_structure: bool,

    /// Split oversized chunks along sentences instead of words
    pub split_on_sentences: bool,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            strategy: ChunkingStrategy::default(),
            enforce_constraints: false,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            preserve_structure: true,
            split_on_sentences: true,
        }
    }
}

impl ChunkingConfig {
    /// Constraint options, or `None` when the pass is disabled
    pub fn constraint_options(&self) -> Option<ConstraintOptions> {
        self.enforce_constraints.then(|| self.constraints())
    }

    /// The configured size fields, whether or not the pass is enabled
    pub fn constraints(&self) -> ConstraintOptions {
        ConstraintOptions {
            max_chunk_size: self.max_chunk_size,
            min_chunk_size: self.min_chunk_size,
            chunk_overlap: self.chunk_overlap,
            preserve_structure: self.preserve_structure,
            split_on_sentences: self.split_on_sentences,
        }
    }
}
