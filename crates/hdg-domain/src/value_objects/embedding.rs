//! Semantic Embedding Value Objects
//!
//! Value objects representing vectors produced by the embedding collaborator
//! for enriched chunk text.

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// ## Business Rules
///
/// - Dimensions equal the vector length for a well-formed embedding
/// - Model name identifies the embedding generation method
///
/// ## Example
///
/// ```rust
/// use hdg_domain::value_objects::Embedding;
///
/// let embedding = Embedding {
///     vector: vec![0.1, 0.2, 0.3],
///     model: "null".to_string(),
///     dimensions: 3,
/// };
/// assert!(!embedding.is_zero());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// A zero vector, used when a provider degrades instead of failing
    pub fn zeroed(dimensions: usize, model: impl Into<String>) -> Self {
        Self {
            vector: vec![0.0; dimensions],
            model: model.into(),
            dimensions,
        }
    }

    /// Whether every component is zero
    pub fn is_zero(&self) -> bool {
        self.vector.iter().all(|v| *v == 0.0)
    }
}

/// Embedding attached to a chunk by identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChunkEmbedding {
    /// Identifier of the embedded chunk
    pub chunk_id: String,
    /// The text that was vectorized (title path prefix + content)
    pub enriched_text: String,
    /// The resulting embedding
    pub embedding: Embedding,
}
