//! Main application configuration

use hdg_domain::value_objects::ProcessingOptions;
use serde::{Deserialize, Serialize};

use super::{ChunkingConfig, EmbeddingConfig, KeywordConfig, LoggingConfig};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Chunking pipeline and constraints
    pub chunking: ChunkingConfig,

    /// Keyword enrichment
    pub keywords: KeywordConfig,

    /// Chunk vectorization
    pub embedding: EmbeddingConfig,

    /// Logging output
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Processing options derived from the chunking, keyword and embedding sections
    pub fn processing_options(&self) -> ProcessingOptions {
        ProcessingOptions {
            constraints: self.chunking.constraint_options(),
            keywords: self.keywords.keyword_options(),
            embeddings: self.embedding.enabled,
        }
    }
}
