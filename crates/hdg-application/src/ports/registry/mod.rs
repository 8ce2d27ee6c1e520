//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for enrichment providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = hashed" → HashedProvider     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in hdg-providers)
//!
//! ```ignore
//! use hdg_application::ports::registry::{KeywordProviderEntry, KEYWORD_PROVIDERS};
//!
//! #[linkme::distributed_slice(KEYWORD_PROVIDERS)]
//! static FREQUENCY_PROVIDER: KeywordProviderEntry = KeywordProviderEntry {
//!     name: "frequency",
//!     description: "Term-frequency keyword extractor",
//!     factory: |config| Ok(Arc::new(FrequencyKeywordExtractor::from_config(config))),
//! };
//! ```
//!
//! ### Resolving a Provider (in hdg-infrastructure)
//!
//! ```ignore
//! use hdg_application::ports::registry::{resolve_keyword_provider, KeywordProviderConfig};
//!
//! let extractor = resolve_keyword_provider(&KeywordProviderConfig::new("frequency"))?;
//! ```

pub mod embedding;
pub mod keyword;

// Re-export all registry types and functions
pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
pub use keyword::{
    KEYWORD_PROVIDERS, KeywordProviderConfig, KeywordProviderEntry, list_keyword_providers,
    resolve_keyword_provider,
};
