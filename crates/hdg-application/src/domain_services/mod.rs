//! Domain Services
//!
//! Interfaces for domain services that encapsulate the chunking pipeline.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`DocumentChunker`] | Parses document text into chunks and an optional structural graph |

/// Document chunking domain service interface
pub mod chunking;

pub use chunking::{ChunkingResult, DocumentChunker, SharedDocumentChunker};
