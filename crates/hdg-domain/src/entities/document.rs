//! Document graph aggregate

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{ChunkNode, GraphEdge, StructuralElement};
use crate::error::Result;
use crate::navigation::GraphNavigator;

/// Aggregate root: chunks, structural elements and edges of one document
///
/// Root elements and parent/child relations are derived from the edge list
/// on demand, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentGraph {
    /// Caller-supplied identifier of the source document
    pub source_id: String,
    /// Heading-derived chunks in document order
    pub chunks: Vec<ChunkNode>,
    /// Block-level elements in document order
    pub elements: Vec<StructuralElement>,
    /// Typed relationships between elements
    pub edges: Vec<GraphEdge>,
}

impl DocumentGraph {
    /// Create a new document graph
    pub fn new(
        source_id: impl Into<String>,
        chunks: Vec<ChunkNode>,
        elements: Vec<StructuralElement>,
        edges: Vec<GraphEdge>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            chunks,
            elements,
            edges,
        }
    }

    /// A graph with no chunks and no elements
    pub fn empty(source_id: impl Into<String>) -> Self {
        Self::new(source_id, Vec::new(), Vec::new(), Vec::new())
    }

    /// Whether a structural graph is available alongside the chunks
    pub fn has_structural_graph(&self) -> bool {
        !self.elements.is_empty()
    }

    /// Navigator over the elements and edges
    pub fn navigator(&self) -> GraphNavigator<'_> {
        GraphNavigator::new(&self.elements, &self.edges)
    }

    /// Elements with no inbound hierarchical edge
    pub fn root_elements(&self) -> Vec<&StructuralElement> {
        self.navigator().root_elements()
    }

    /// Hierarchical children of an element
    pub fn child_elements(&self, id: &str) -> Vec<&StructuralElement> {
        self.navigator().child_elements(id)
    }

    /// Hierarchical parent of an element
    pub fn parent_element(&self, id: &str) -> Option<&StructuralElement> {
        self.navigator().parent_element(id)
    }

    /// Look up a chunk by id
    pub fn chunk(&self, id: &str) -> Option<&ChunkNode> {
        self.chunks.iter().find(|c| c.id() == id)
    }

    /// Chunks without a parent
    pub fn top_level_chunks(&self) -> Vec<&ChunkNode> {
        self.chunks.iter().filter(|c| c.parent_id().is_none()).collect()
    }

    /// Direct child chunks of a chunk, in document order
    pub fn child_chunks(&self, id: &str) -> Vec<&ChunkNode> {
        self.chunks
            .iter()
            .filter(|c| c.parent_id() == Some(id))
            .collect()
    }

    /// The chunk and its ancestors, outermost first
    pub fn chunk_path(&self, id: &str) -> Vec<&ChunkNode> {
        ChunkIndex::new(&self.chunks).path(id)
    }

    /// Check the structural graph invariants
    pub fn validate(&self) -> Result<()> {
        self.navigator().validate()
    }
}

/// Identifier lookup over a chunk list, built once per document
#[derive(Debug, Clone)]
pub struct ChunkIndex<'a> {
    by_id: HashMap<&'a str, &'a ChunkNode>,
}

impl<'a> ChunkIndex<'a> {
    /// Index every chunk of `chunks` by identifier
    pub fn new(chunks: &'a [ChunkNode]) -> Self {
        Self {
            by_id: chunks.iter().map(|c| (c.id(), c)).collect(),
        }
    }

    /// Chunk by identifier
    pub fn get(&self, id: &str) -> Option<&'a ChunkNode> {
        self.by_id.get(id).copied()
    }

    /// Ancestor path of a chunk, outermost first
    ///
    /// Dangling parent ids end the walk; the walk is bounded by the index size.
    pub fn path(&self, id: &str) -> Vec<&'a ChunkNode> {
        let mut path = Vec::new();
        let mut current = self.get(id);
        while let Some(chunk) = current {
            if path.len() > self.by_id.len() {
                break;
            }
            path.push(chunk);
            current = chunk.parent_id().and_then(|p| self.get(p));
        }
        path.reverse();
        path
    }
}
