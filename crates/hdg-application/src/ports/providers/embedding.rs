use async_trait::async_trait;
use hdg_domain::value_objects::Embedding;

/// Text Vectorization Interface
///
/// Defines the contract for collaborators that turn enriched chunk text into
/// a fixed-length vector. The core only prepares the text (ancestor titles
/// followed by content) and stores the result; the model behind it is opaque.
///
/// # Failure Contract
///
/// `vectorize` is infallible. A provider that fails
/// internally degrades to a deterministic placeholder (typically
/// [`Embedding::zeroed`]) instead of propagating the error.
///
/// # Example
///
/// ```ignore
/// use hdg_application::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.vectorize("Install > Linux\n\nRun the script.", false).await;
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Vectorize text; `is_query` distinguishes search queries from passages
    async fn vectorize(&self, text: &str, is_query: bool) -> Embedding;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
