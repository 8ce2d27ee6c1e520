use async_trait::async_trait;
use hdg_domain::error::Result;

/// Keyword Extraction Interface
///
/// Consumes chunk text and returns keywords ordered by relevance. The core
/// caps the list to the configured maximum and is agnostic to the algorithm.
/// Failures are not masked: an error here aborts processing and reaches the
/// caller unchanged.
#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    /// Extract keywords from text, most relevant first
    async fn extract_keywords(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
