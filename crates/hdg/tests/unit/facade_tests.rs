//! End-to-end tests through the public facade

use std::sync::Arc;

use hdg::infrastructure::config::ChunkingConfig;
use hdg::{
    AppConfig, ChunkNode, ChunkingStrategy, DocumentProcessingService, ElementType, HeadingChunker,
    HeadingRule, LevelSpec, RelationshipKind, RuleEngine, process_document,
};
use tokio_util::sync::CancellationToken;

fn titles(chunks: &[ChunkNode]) -> Vec<&str> {
    chunks.iter().map(ChunkNode::clean_title).collect()
}

fn by_title<'a>(chunks: &'a [ChunkNode], title: &str) -> &'a ChunkNode {
    chunks
        .iter()
        .find(|c| c.clean_title() == title)
        .expect("chunk with title")
}

#[tokio::test]
async fn test_markdown_levels_nest() {
    let document = process_document(&AppConfig::default(), "# A\n## B\n### C\n## D", "doc")
        .await
        .expect("processed");
    let chunks = &document.graph.chunks;

    assert_eq!(titles(chunks), vec!["A", "B", "C", "D"]);
    let a = by_title(chunks, "A");
    let b = by_title(chunks, "B");
    assert_eq!(a.parent_id(), None);
    assert_eq!(b.parent_id(), Some(a.id()));
    assert_eq!(by_title(chunks, "C").parent_id(), Some(b.id()));
    assert_eq!(by_title(chunks, "D").parent_id(), Some(a.id()));
}

#[tokio::test]
async fn test_numeric_outline_levels() {
    let document = process_document(&AppConfig::default(), "1. X\n1.1 Y\n1.2 Z\n2. W", "doc")
        .await
        .expect("processed");
    let chunks = &document.graph.chunks;

    let levels: Vec<usize> = chunks.iter().map(ChunkNode::level).collect();
    assert_eq!(levels, vec![1, 2, 2, 1]);
    let x = by_title(chunks, "X");
    assert_eq!(by_title(chunks, "Y").parent_id(), Some(x.id()));
    assert_eq!(by_title(chunks, "Z").parent_id(), Some(x.id()));
    assert_eq!(by_title(chunks, "W").parent_id(), None);
}

#[tokio::test]
async fn test_structural_graph_through_config() {
    let config = AppConfig {
        chunking: ChunkingConfig {
            strategy: ChunkingStrategy::Structural,
            ..ChunkingConfig::default()
        },
        ..AppConfig::default()
    };
    let text = "# Title\n\nIntro paragraph.\n\n---\n\n```rust\n# not a heading\n```\n";
    let document = process_document(&config, text, "doc").await.expect("processed");
    let graph = &document.graph;

    let types: Vec<ElementType> = graph.elements.iter().map(|e| e.element_type).collect();
    assert_eq!(
        types,
        vec![
            ElementType::Heading,
            ElementType::Paragraph,
            ElementType::ThematicBreak,
            ElementType::CodeBlock,
        ]
    );
    assert_eq!(titles(&graph.chunks), vec!["Title"]);

    let heading = &graph.elements[0];
    let contained = graph
        .edges
        .iter()
        .filter(|e| e.kind == RelationshipKind::Contains && e.source_id == heading.id)
        .count();
    assert_eq!(contained, 3);
    assert_eq!(graph.root_elements().len(), 1);
}

#[tokio::test]
async fn test_custom_rules() {
    let rules = vec![
        HeadingRule::new(
            "chapter",
            r"^Chapter (?P<n>\d+):\s*(?P<title>.+)$",
            LevelSpec::Fixed(1),
            1,
        )
        .expect("chapter rule"),
        HeadingRule::new(
            "scene",
            r"^\*\*\*\s*(?P<title>.*)$",
            LevelSpec::Fixed(2),
            2,
        )
        .expect("scene rule"),
    ];
    let engine = RuleEngine::with_rules(rules).expect("engine");
    let service =
        DocumentProcessingService::builder(Arc::new(HeadingChunker::with_engine(engine)))
            .build()
            .expect("service");

    let text = "Chapter 1: Arrival\nThe train was late.\n*** Platform\nRain.\nChapter 2: Departure\n";
    let document = service
        .process(text, "novel", &CancellationToken::new())
        .await
        .expect("processed");
    let chunks = &document.graph.chunks;

    assert_eq!(titles(chunks), vec!["Arrival", "Platform", "Departure"]);
    assert_eq!(chunks[0].chunk_type(), "chapter");
    assert_eq!(chunks[0].content(), "The train was late.");
    assert_eq!(chunks[1].parent_id(), Some(chunks[0].id()));
    // Raw titles keep the heading marker
    assert_eq!(chunks[1].raw_title(), "*** Platform");
}

#[tokio::test]
async fn test_graph_serializes_to_json() {
    let document = process_document(&AppConfig::default(), "# A\nbody", "doc")
        .await
        .expect("processed");
    let value = serde_json::to_value(&document.graph).expect("json");

    assert_eq!(value["source_id"], "doc");
    assert_eq!(value["chunks"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_empty_document() {
    let document = process_document(&AppConfig::default(), "", "empty")
        .await
        .expect("processed");
    assert!(document.graph.chunks.is_empty());
    assert!(!document.has_structural_graph());
}

#[tokio::test]
async fn test_config_file_drives_processing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("hdg.toml");
    std::fs::write(
        &path,
        "[chunking]\nstrategy = \"structural\"\nenforce_constraints = true\nmax_chunk_size = 25\nmin_chunk_size = 0\n",
    )
    .expect("write config");

    let config = hdg::ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("config");
    assert_eq!(config.chunking.strategy, ChunkingStrategy::Structural);

    let document = process_document(
        &config,
        "# Notes\nFirst sentence here. Second sentence here.",
        "notes.md",
    )
    .await
    .expect("processed");

    assert_eq!(titles(&document.graph.chunks), vec!["Notes", "Notes (Part 2)"]);
    assert!(document.has_structural_graph());
}
