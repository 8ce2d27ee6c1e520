//! Ports (interfaces) for external collaborators
//!
//! - [`providers`]: keyword and embedding provider traits
//! - [`registry`]: linkme-based provider discovery

pub mod providers;
pub mod registry;

pub use providers::{EmbeddingProvider, KeywordExtractor};
