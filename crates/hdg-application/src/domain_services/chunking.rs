//! Document Chunker Domain Port
//!
//! Defines the business contract for turning raw document text into a
//! heading-derived chunk tree, optionally accompanied by a block-level
//! structural graph. Services depend on this abstraction instead of the
//! concrete rule engine and Markdown parser living in `hdg-providers`.

use std::sync::Arc;

use hdg_domain::entities::{ChunkNode, GraphEdge, StructuralElement};
use hdg_domain::error::Result;
use hdg_domain::value_objects::{ChunkingStrategy, ConstraintOptions};

/// Result of chunking a single document
#[derive(Debug, Clone, Default)]
pub struct ChunkingResult {
    /// Chunks in document order, after the optional constraint pass
    pub chunks: Vec<ChunkNode>,
    /// Block-level elements in document order (empty without a graph)
    pub elements: Vec<StructuralElement>,
    /// Relationship edges between elements
    pub edges: Vec<GraphEdge>,
    /// Whether the structural graph was built
    pub has_structural_graph: bool,
}

impl ChunkingResult {
    /// Create a heading-only result
    pub fn from_chunks(chunks: Vec<ChunkNode>) -> Self {
        Self {
            chunks,
            ..Self::default()
        }
    }

    /// Create a result carrying a structural graph
    ///
    /// A document without any block yields no graph.
    pub fn with_graph(
        chunks: Vec<ChunkNode>,
        elements: Vec<StructuralElement>,
        edges: Vec<GraphEdge>,
    ) -> Self {
        let has_structural_graph = !elements.is_empty();
        Self {
            chunks,
            elements,
            edges,
            has_structural_graph,
        }
    }

    /// Whether nothing was produced
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty() && self.elements.is_empty()
    }
}

/// Domain Port for Document Chunking Operations
///
/// Implementations run heading detection, hierarchy building and, when
/// `constraints` is given, the size/overlap pass. Chunking is pure and
/// synchronous; only enrichment talks to external collaborators.
///
/// # Example
///
/// ```ignore
/// use hdg_application::domain_services::chunking::DocumentChunker;
/// use hdg_domain::value_objects::ConstraintOptions;
///
/// fn chunk(chunker: &dyn DocumentChunker, text: &str) -> hdg_domain::Result<usize> {
///     let result = chunker.chunk_document(text, Some(&ConstraintOptions::default()))?;
///     Ok(result.chunks.len())
/// }
/// ```
pub trait DocumentChunker: Send + Sync {
    /// Chunk document text
    ///
    /// # Arguments
    ///
    /// * `text` - Full document text
    /// * `constraints` - Size limits; `None` leaves the hierarchy untouched
    fn chunk_document(
        &self,
        text: &str,
        constraints: Option<&ConstraintOptions>,
    ) -> Result<ChunkingResult>;

    /// Strategy implemented by this chunker
    fn strategy(&self) -> ChunkingStrategy;

    /// Whether results carry a structural graph
    fn supports_structural_graph(&self) -> bool {
        self.strategy().supports_structural_graph()
    }
}

/// Shared document chunker for dependency injection
pub type SharedDocumentChunker = Arc<dyn DocumentChunker>;
