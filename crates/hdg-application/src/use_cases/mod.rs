//! Use Cases
//!
//! | Use Case | Description |
//! |----------|-------------|
//! | [`DocumentProcessingService`] | Chunk, enrich and vectorize a document |

/// Document processing use case
pub mod document_processing;

pub use document_processing::{
    DocumentProcessingService, DocumentProcessingServiceBuilder, ProcessedDocument, enriched_text,
};
