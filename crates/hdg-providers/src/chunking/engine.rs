//! Document chunking strategies
//!
//! Two [`DocumentChunker`] implementations share the rule engine:
//!
//! - [`HeadingChunker`]: rule engine -> hierarchy builder -> constraint pass
//! - [`StructuralChunker`]: the same chunks plus the block-level structural graph

use std::sync::Arc;

use hdg_application::domain_services::chunking::{ChunkingResult, DocumentChunker};
use hdg_domain::entities::ChunkNode;
use hdg_domain::error::Result;
use hdg_domain::value_objects::{ChunkingStrategy, ConstraintOptions};

use super::constraints::ConstraintProcessor;
use super::hierarchy::HierarchyBuilder;
use super::rules::RuleEngine;
use super::structural::StructuralGraphBuilder;

/// Heading-only chunking driven by the rule engine
#[derive(Debug, Clone)]
pub struct HeadingChunker {
    engine: RuleEngine,
}

impl HeadingChunker {
    /// Chunker with the built-in heading rules
    pub fn new() -> Result<Self> {
        Ok(Self::with_engine(RuleEngine::new()?))
    }

    /// Chunker over a custom rule engine
    pub fn with_engine(engine: RuleEngine) -> Self {
        Self { engine }
    }

    /// The rule engine in use
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Build the hierarchy and, when given, enforce the constraints
    pub fn chunk(
        &self,
        text: &str,
        constraints: Option<&ConstraintOptions>,
    ) -> Result<Vec<ChunkNode>> {
        let chunks = HierarchyBuilder::new(&self.engine).build(text);
        match constraints {
            Some(options) => Ok(ConstraintProcessor::new(*options)?.process(chunks)),
            None => Ok(chunks),
        }
    }
}

impl DocumentChunker for HeadingChunker {
    fn chunk_document(
        &self,
        text: &str,
        constraints: Option<&ConstraintOptions>,
    ) -> Result<ChunkingResult> {
        Ok(ChunkingResult::from_chunks(self.chunk(text, constraints)?))
    }

    fn strategy(&self) -> ChunkingStrategy {
        ChunkingStrategy::Headings
    }
}

/// Heading chunks plus the structural graph of the same text
#[derive(Debug, Clone)]
pub struct StructuralChunker {
    headings: HeadingChunker,
    graph: StructuralGraphBuilder,
}

impl StructuralChunker {
    /// Chunker with the built-in heading rules
    pub fn new() -> Result<Self> {
        Ok(Self::with_engine(RuleEngine::new()?))
    }

    /// Chunker over a custom rule engine
    pub fn with_engine(engine: RuleEngine) -> Self {
        Self {
            headings: HeadingChunker::with_engine(engine),
            graph: StructuralGraphBuilder::new(),
        }
    }
}

impl DocumentChunker for StructuralChunker {
    fn chunk_document(
        &self,
        text: &str,
        constraints: Option<&ConstraintOptions>,
    ) -> Result<ChunkingResult> {
        let chunks = self.headings.chunk(text, constraints)?;
        let graph = self.graph.build(text)?;
        Ok(ChunkingResult::with_graph(chunks, graph.elements, graph.edges))
    }

    fn strategy(&self) -> ChunkingStrategy {
        ChunkingStrategy::Structural
    }
}

/// Chunker implementing `strategy` with the built-in rules
pub fn chunker_for(strategy: ChunkingStrategy) -> Result<Arc<dyn DocumentChunker>> {
    let chunker: Arc<dyn DocumentChunker> = match strategy {
        ChunkingStrategy::Headings => Arc::new(HeadingChunker::new()?),
        ChunkingStrategy::Structural => Arc::new(StructuralChunker::new()?),
    };
    Ok(chunker)
}
