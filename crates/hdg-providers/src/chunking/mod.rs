//! Document chunking provider implementations
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`RuleEngine`] | Priority-ordered heading detection rules |
//! | [`HierarchyBuilder`] | Single-pass context-stack tree builder |
//! | [`ConstraintProcessor`] | Size splitting and overlap post-pass |
//! | [`StructuralGraphBuilder`] | Block-level elements and typed edges |
//! | [`HeadingChunker`] / [`StructuralChunker`] | `DocumentChunker` strategies |

pub mod constraints;
pub mod engine;
pub mod hierarchy;
pub mod rules;
pub mod structural;

pub use constraints::ConstraintProcessor;
pub use engine::{HeadingChunker, StructuralChunker, chunker_for};
pub use hierarchy::HierarchyBuilder;
pub use rules::{HeadingRule, LevelSpec, RuleEngine, default_rules};
pub use structural::{StructuralGraph, StructuralGraphBuilder, derive_edges};
