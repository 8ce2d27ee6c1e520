//! Keyword Extractor Registry
//!
//! Auto-registration system for keyword extractors using linkme distributed slices.

use std::sync::Arc;

use crate::ports::providers::KeywordExtractor;

/// Configuration for keyword extractor creation
#[derive(Debug, Clone, Default)]
pub struct KeywordProviderConfig {
    /// Provider name (e.g., "null", "frequency")
    pub provider: String,
    /// Minimum token length considered a keyword candidate
    pub min_word_length: Option<usize>,
}

impl KeywordProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the minimum word length
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = Some(min_word_length);
        self
    }
}

/// Registry entry for keyword extractors
pub struct KeywordProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create extractor instance
    pub factory: fn(&KeywordProviderConfig) -> Result<Arc<dyn KeywordExtractor>, String>,
}

#[linkme::distributed_slice]
pub static KEYWORD_PROVIDERS: [KeywordProviderEntry] = [..];

/// Resolve keyword extractor by name from registry
pub fn resolve_keyword_provider(
    config: &KeywordProviderConfig,
) -> Result<Arc<dyn KeywordExtractor>, String> {
    let provider_name = &config.provider;

    for entry in KEYWORD_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = KEYWORD_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown keyword provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered keyword extractors as (name, description) tuples
pub fn list_keyword_providers() -> Vec<(&'static str, &'static str)> {
    KEYWORD_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
