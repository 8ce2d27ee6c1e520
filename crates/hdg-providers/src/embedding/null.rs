//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use std::sync::Arc;

use async_trait::async_trait;
use hdg_application::ports::EmbeddingProvider;
use hdg_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use hdg_domain::value_objects::Embedding;
use tracing::warn;

use crate::constants::{EMBEDDING_DIMENSION_NULL, EMBEDDING_MODEL_NULL};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Null embedding provider for testing
///
/// Returns unit-length vectors derived from an FNV-1a hash of the input, so
/// identical text always yields identical vectors. Queries and passages are
/// hashed with different prefixes. Blank text degrades to a zero vector.
///
/// # Example
///
/// ```rust
/// use hdg_providers::embedding::NullEmbeddingProvider;
/// use hdg_application::ports::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
    model: String,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a provider producing vectors of the given size
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions,
            model: EMBEDDING_MODEL_NULL.to_string(),
        }
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    fn hashed_vector(&self, text: &str, is_query: bool) -> Vec<f32> {
        let prefix: &[u8] = if is_query { b"query:" } else { b"passage:" };
        let mut state = fnv1a(FNV_OFFSET, prefix);
        state = fnv1a(state, text.as_bytes());

        let mut vector: Vec<f32> = (0..self.dimensions)
            .map(|_| {
                // xorshift64 stream seeded by the text hash
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                ((state >> 40) as f32 / (1u64 << 24) as f32) * 2.0 - 1.0
            })
            .collect();

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|v| *v /= norm);
        }
        vector
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn vectorize(&self, text: &str, is_query: bool) -> Embedding {
        if text.trim().is_empty() {
            warn!(provider = "null", "Blank input, returning zero vector");
            return Embedding::zeroed(self.dimensions, &self.model);
        }
        Embedding {
            vector: self.hashed_vector(text, is_query),
            model: self.model.clone(),
            dimensions: self.dimensions,
        }
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

fn fnv1a(mut hash: u64, bytes: &[u8]) -> u64 {
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    // xorshift must never be seeded with zero
    if hash == 0 { FNV_OFFSET } else { hash }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn null_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let dimensions = config.dimensions.unwrap_or(EMBEDDING_DIMENSION_NULL);
    if dimensions == 0 {
        return Err("Null embedding provider requires dimensions > 0".to_string());
    }
    let mut provider = NullEmbeddingProvider::with_dimensions(dimensions);
    if let Some(model) = &config.model {
        provider.model = model.clone();
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_factory,
};
