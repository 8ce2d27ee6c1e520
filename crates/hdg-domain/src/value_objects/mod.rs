//! Domain Value Objects
//!
//! Immutable value objects that describe matches, options and vectors
//! without identity of their own.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`HeadingMatch`] | A line claimed by a heading rule |
//! | [`Embedding`] | Vector representation of enriched chunk text |
//! | [`ConstraintOptions`] | Size, overlap and splitting settings |
//! | [`KeywordOptions`] | Keyword extraction and injection settings |
//! | [`ProcessingOptions`] | Complete option set for a processing call |

/// Semantic embedding value objects
pub mod embedding;
/// Heading match value object
pub mod heading;
/// Processing option value objects
pub mod options;

pub use embedding::{ChunkEmbedding, Embedding};
pub use heading::HeadingMatch;
pub use options::{
    ChunkingStrategy, ConstraintOptions, KeywordOptions, ProcessingOptions, SectionKeywords,
};
