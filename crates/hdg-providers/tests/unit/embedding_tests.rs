//! Unit tests for the null embedding provider

use hdg_application::ports::EmbeddingProvider;
use hdg_application::ports::registry::{
    EmbeddingProviderConfig, list_embedding_providers, resolve_embedding_provider,
};
use hdg_providers::embedding::NullEmbeddingProvider;

#[tokio::test]
async fn test_vectors_are_deterministic() {
    let provider = NullEmbeddingProvider::new();
    let first = provider.vectorize("Install > Linux\n\nRun it.", false).await;
    let second = provider.vectorize("Install > Linux\n\nRun it.", false).await;
    assert_eq!(first, second);
    assert_eq!(first.dimensions, 384);
    assert_eq!(first.vector.len(), 384);
    assert_eq!(first.model, "null");
}

#[tokio::test]
async fn test_vectors_are_unit_length() {
    let provider = NullEmbeddingProvider::with_dimensions(64);
    let embedding = provider.vectorize("some text", false).await;
    let norm: f32 = embedding.vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() < 1e-4);
}

#[tokio::test]
async fn test_query_and_passage_differ() {
    let provider = NullEmbeddingProvider::new();
    let passage = provider.vectorize("rust", false).await;
    let query = provider.vectorize("rust", true).await;
    assert_ne!(passage.vector, query.vector);

    let other = provider.vectorize("cargo", false).await;
    assert_ne!(passage.vector, other.vector);
}

#[tokio::test]
async fn test_blank_text_degrades_to_zero_vector() {
    let provider = NullEmbeddingProvider::with_dimensions(8);
    let embedding = provider.vectorize("   ", false).await;
    assert!(embedding.is_zero());
    assert_eq!(embedding.vector.len(), 8);
}

#[test]
fn test_registered_in_registry() {
    let providers = list_embedding_providers();
    assert!(providers.iter().any(|(name, _)| *name == "null"));
}

#[tokio::test]
async fn test_resolve_with_config() {
    let config = EmbeddingProviderConfig::new("null")
        .with_dimensions(16)
        .with_model("placeholder");
    let provider = resolve_embedding_provider(&config).expect("null provider resolves");
    assert_eq!(provider.dimensions(), 16);
    assert_eq!(provider.provider_name(), "null");

    let embedding = provider.vectorize("text", false).await;
    assert_eq!(embedding.model, "placeholder");
    assert_eq!(embedding.vector.len(), 16);
}

#[test]
fn test_resolve_rejects_zero_dimensions() {
    let config = EmbeddingProviderConfig::new("null").with_dimensions(0);
    assert!(resolve_embedding_provider(&config).is_err());
}
