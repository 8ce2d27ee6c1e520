//! Provider Ports
//!
//! Interfaces for the external collaborators invoked during enrichment.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`EmbeddingProvider`] | Vectorizes enriched chunk text |
//! | [`KeywordExtractor`] | Extracts ordered keywords from chunk text |

/// Embedding provider port
pub mod embedding;
/// Keyword extraction port
pub mod keyword;

pub use embedding::EmbeddingProvider;
pub use keyword::KeywordExtractor;
