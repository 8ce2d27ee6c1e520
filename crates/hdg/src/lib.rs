//! # hdg
//!
//! Turns a flat text document into a hierarchy of heading-rooted chunks and,
//! optionally, a typed graph of every block-level element.
//!
//! ## Features
//!
//! - **Rule-driven headings**: markdown, numeric outlines, legal sections,
//!   appendices, roman numerals and letters, extensible with custom rules
//! - **Single-pass hierarchy**: explicit context stack, arbitrary level jumps
//! - **Constraints**: size-bounded splitting on sentences or words, overlap
//! - **Structural graph**: `HAS_SUBSECTION`, `CONTAINS`, `SIBLING`,
//!   `PRECEDES` and `FOLLOWS` edges over CommonMark blocks
//! - **Enrichment**: keywords and title-prefixed embeddings per chunk
//!
//! ## Example
//!
//! ```ignore
//! use hdg::{AppConfig, process_document};
//!
//! let document = process_document(&AppConfig::default(), "# A\n## B\ntext", "doc").await?;
//! assert_eq!(document.graph.chunks.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, navigation and errors
//! - `application` - ports, provider registry, processing use case
//! - `providers` - rule engine, builders, chunkers, keyword/embedding providers
//! - `infrastructure` - configuration, logging, composition root

// Force-link hdg-providers to ensure linkme registrations are included
extern crate hdg_providers;

use tokio_util::sync::CancellationToken;

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use hdg_domain::*;
}

/// Application layer - ports and use cases
pub mod application {
    pub use hdg_application::*;
}

/// Provider implementations
pub mod providers {
    pub use hdg_providers::*;
}

/// Infrastructure layer - configuration, logging and wiring
pub mod infrastructure {
    pub use hdg_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::use_cases::{DocumentProcessingService, ProcessedDocument};
pub use infrastructure::config::{AppConfig, ConfigLoader};
pub use infrastructure::di::{AppContext, init_app};
pub use providers::chunking::{
    HeadingChunker, HeadingRule, LevelSpec, RuleEngine, StructuralChunker,
};

/// Process one document with a freshly wired context
///
/// Convenience entry for one-off calls; build an [`AppContext`] with
/// [`init_app`] to process many documents with the same configuration.
pub async fn process_document(
    config: &AppConfig,
    text: &str,
    source_id: &str,
) -> Result<ProcessedDocument> {
    let context = init_app(config.clone())?;
    context
        .process(text, source_id, &CancellationToken::new())
        .await
}
