//! Domain entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`ChunkNode`] | Node of the heading-derived chunk tree |
//! | [`StructuralElement`] | Block-level element of the structural graph |
//! | [`GraphEdge`] | Typed relationship between two elements |
//! | [`DocumentGraph`] | Aggregate of chunks, elements and edges |

/// Chunk node entity
pub mod chunk;
/// Document graph aggregate
pub mod document;
/// Graph edge entity
pub mod edge;
/// Structural element entity
pub mod element;

pub use chunk::{ChunkNode, new_id};
pub use document::{ChunkIndex, DocumentGraph};
pub use edge::{GraphEdge, RelationshipKind};
pub use element::{ElementType, StructuralElement};
