//! Composition root tests

use hdg_domain::error::Error;
use hdg_domain::value_objects::ChunkingStrategy;
use hdg_infrastructure::config::{
    AppConfig, ChunkingConfig, ConfigBuilder, EmbeddingConfig, KeywordConfig,
};
use hdg_infrastructure::di::init_app;
use tokio_util::sync::CancellationToken;

const GUIDE: &str = "# Guide\nThe guide explains parsing.\n## Install\nInstall the parser crate.\n## Usage\nRun the parser on markdown files.\n";

#[test]
fn test_default_config_wires_headings_only() {
    let context = init_app(AppConfig::default()).expect("context");

    assert_eq!(context.chunker().strategy(), ChunkingStrategy::Headings);
    assert!(context.keyword_extractor().is_none());
    assert!(context.embedding_provider().is_none());
    assert!(format!("{context:?}").starts_with("AppContext"));
}

#[tokio::test]
async fn test_full_pipeline_from_config() {
    let config = ConfigBuilder::new()
        .with_chunking(ChunkingConfig {
            strategy: ChunkingStrategy::Structural,
            ..ChunkingConfig::default()
        })
        .with_keywords(KeywordConfig {
            extract_keywords: true,
            max_keywords_per_chunk: 3,
            ..KeywordConfig::default()
        })
        .with_embedding(EmbeddingConfig {
            enabled: true,
            dimensions: 16,
            ..EmbeddingConfig::default()
        })
        .build();
    let context = init_app(config).expect("context");
    assert_eq!(
        context.keyword_extractor().map(|k| k.provider_name().to_string()),
        Some("frequency".to_string())
    );

    let document = context
        .process(GUIDE, "guide.md", &CancellationToken::new())
        .await
        .expect("processed");

    assert!(document.has_structural_graph());
    assert_eq!(document.graph.chunks.len(), 3);
    assert_eq!(document.embeddings.len(), 3);
    assert!(document.embeddings.iter().all(|e| e.embedding.vector.len() == 16));
    assert!(
        document
            .graph
            .chunks
            .iter()
            .all(|c| !c.keywords().is_empty() && c.keywords().len() <= 3)
    );

    let query = context.embed_query("parser").await.expect("query");
    assert_eq!(query.dimensions, 16);
}

#[tokio::test]
async fn test_constraints_from_config() {
    let config = ConfigBuilder::new()
        .with_chunking(ChunkingConfig {
            enforce_constraints: true,
            max_chunk_size: 25,
            min_chunk_size: 0,
            ..ChunkingConfig::default()
        })
        .build();
    let context = init_app(config).expect("context");

    let document = context
        .process(
            "# Notes\nFirst sentence here. Second sentence here.",
            "notes.md",
            &CancellationToken::new(),
        )
        .await
        .expect("processed");
    let titles: Vec<&str> = document.graph.chunks.iter().map(|c| c.clean_title()).collect();
    assert_eq!(titles, vec!["Notes", "Notes (Part 2)"]);
}

#[test]
fn test_unknown_provider_fails_at_init() {
    let config = ConfigBuilder::new()
        .with_embedding(EmbeddingConfig {
            enabled: true,
            provider: "remote".to_string(),
            ..EmbeddingConfig::default()
        })
        .build();
    let err = init_app(config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("remote"));
}

#[tokio::test]
async fn test_cancelled_processing() {
    let context = init_app(AppConfig::default()).expect("context");
    let token = CancellationToken::new();
    token.cancel();

    let err = context.process(GUIDE, "guide.md", &token).await.unwrap_err();
    assert!(err.is_cancelled());
}
