// Allow collapsible_if for complex conditional logic
#![allow(clippy::collapsible_if)]

//! # hdg - Provider Implementations
//!
//! This crate contains the chunking pipeline and the user-selectable
//! enrichment providers. Each provider implements a port (trait) defined in
//! `hdg-application`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Chunking | `DocumentChunker` | HeadingChunker, StructuralChunker |
//! | Embedding | `EmbeddingProvider` | Null |
//! | Keywords | `KeywordExtractor` | Frequency, Null |
//!
//! Embedding and keyword providers register themselves in the linkme
//! registries declared by `hdg-application`; linking this crate is enough to
//! make them resolvable by name.
//!
//! ## Usage
//!
//! ```ignore
//! use hdg_providers::chunking::{HeadingChunker, RuleEngine};
//! use hdg_providers::embedding::NullEmbeddingProvider;
//! use hdg_providers::keyword::FrequencyKeywordExtractor;
//! ```

// Re-export hdg-domain types commonly used with providers
pub use hdg_application::domain_services::DocumentChunker;
pub use hdg_application::ports::{EmbeddingProvider, KeywordExtractor};
pub use hdg_domain::error::{Error, Result};

/// Provider-specific constants
pub mod constants;

/// Chunking pipeline: rule engine, hierarchy, constraints, structural graph
pub mod chunking;

/// Embedding provider implementations
///
/// Implements `EmbeddingProvider` trait.
pub mod embedding;

/// Keyword extractor implementations
///
/// Implements `KeywordExtractor` trait.
pub mod keyword;
