//! Application Layer - hdg
//!
//! This crate contains the application layer of hdg, orchestrating the
//! chunking pipeline and the enrichment collaborators according to Clean
//! Architecture principles.
//!
//! ## Architecture
//!
//! The application layer:
//! - Defines ports (interfaces) for keyword extraction and embeddings
//! - Declares the linkme registry slices providers register into
//! - Defines the [`DocumentChunker`] domain service contract
//! - Implements the document processing use case
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `hdg-domain`: entities, value objects and errors
//! - Pure Rust libraries for async, cancellation and logging

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
