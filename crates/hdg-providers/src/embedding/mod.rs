//! Embedding Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |

pub mod null;

pub use null::NullEmbeddingProvider;
