//! Embedding configuration types

use hdg_application::ports::registry::EmbeddingProviderConfig;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EMBEDDING_DIMENSIONS, DEFAULT_EMBEDDING_PROVIDER};

/// Embedding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Vectorize every chunk after chunking
    pub enabled: bool,

    /// Registered provider name
    pub provider: String,

    /// Model name reported on embeddings
    pub model: Option<String>,

    /// Embedding dimensions
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: None,
            dimensions: DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}

impl EmbeddingConfig {
    /// Registry lookup configuration for the provider
    pub fn provider_config(&self) -> EmbeddingProviderConfig {
        let config = EmbeddingProviderConfig::new(&self.provider).with_dimensions(self.dimensions);
        match &self.model {
            Some(model) => config.with_model(model),
            None => config,
        }
    }
}
