//! Null keyword extractor
//!
//! Returns no keywords. Useful when only custom and section keywords are
//! wanted, and for tests.

use std::sync::Arc;

use async_trait::async_trait;
use hdg_application::ports::KeywordExtractor;
use hdg_application::ports::registry::{KEYWORD_PROVIDERS, KeywordProviderConfig, KeywordProviderEntry};
use hdg_domain::error::Result;

/// Keyword extractor that never finds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullKeywordExtractor;

impl NullKeywordExtractor {
    /// Create a new null extractor
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl KeywordExtractor for NullKeywordExtractor {
    async fn extract_keywords(&self, _text: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[linkme::distributed_slice(KEYWORD_PROVIDERS)]
static NULL_KEYWORD_PROVIDER: KeywordProviderEntry = KeywordProviderEntry {
    name: "null",
    description: "Null keyword extractor (always empty)",
    factory: |_config: &KeywordProviderConfig| Ok(Arc::new(NullKeywordExtractor::new())),
};
