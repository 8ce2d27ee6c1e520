//! Unit tests for the chunking strategies

use hdg_application::domain_services::DocumentChunker;
use hdg_domain::{ChunkingStrategy, ConstraintOptions, DocumentGraph};
use hdg_providers::chunking::{
    HeadingChunker, HeadingRule, LevelSpec, RuleEngine, StructuralChunker, chunker_for,
};

const DOC: &str = "# Guide\n\nWelcome.\n\n## Install\n\nRun the installer. Then restart.\n\n## Usage\n\nCall it.\n";

#[test]
fn test_heading_chunker_has_no_graph() {
    let chunker = HeadingChunker::new().expect("chunker");
    let result = chunker.chunk_document(DOC, None).expect("chunking");

    assert_eq!(chunker.strategy(), ChunkingStrategy::Headings);
    assert!(!chunker.supports_structural_graph());
    assert!(!result.has_structural_graph);
    assert!(result.elements.is_empty());
    assert!(result.edges.is_empty());
    assert_eq!(result.chunks.len(), 3);
    assert_eq!(result.chunks[1].content(), "Run the installer. Then restart.");
}

#[test]
fn test_structural_chunker_adds_graph() {
    let chunker = StructuralChunker::new().expect("chunker");
    let result = chunker.chunk_document(DOC, None).expect("chunking");

    assert_eq!(chunker.strategy(), ChunkingStrategy::Structural);
    assert!(result.has_structural_graph);
    assert_eq!(result.chunks.len(), 3);
    assert_eq!(result.elements.len(), 6);

    let graph = DocumentGraph::new("guide.md", result.chunks, result.elements, result.edges);
    assert!(graph.validate().is_ok());
    assert_eq!(graph.root_elements().len(), 1);
}

#[test]
fn test_structural_chunker_on_blank_text() {
    let chunker = StructuralChunker::new().expect("chunker");
    let result = chunker.chunk_document("  \n", None).expect("chunking");
    assert!(result.is_empty());
    assert!(!result.has_structural_graph);
}

#[test]
fn test_constraints_are_applied() {
    let chunker = HeadingChunker::new().expect("chunker");
    let options = ConstraintOptions::with_max_size(20);
    let result = chunker.chunk_document(DOC, Some(&options)).expect("chunking");

    let titles: Vec<&str> = result.chunks.iter().map(|c| c.clean_title()).collect();
    assert_eq!(titles, vec!["Guide", "Install", "Install (Part 2)", "Usage"]);
}

#[test]
fn test_invalid_constraints_fail_before_chunking() {
    let chunker = HeadingChunker::new().expect("chunker");
    let options = ConstraintOptions::with_max_size(0);
    assert!(chunker.chunk_document(DOC, Some(&options)).is_err());
}

fn wiki_level(captures: &regex::Captures<'_>) -> usize {
    captures
        .name("marks")
        .map_or(1, |m| m.as_str().len())
}

#[test]
fn test_custom_engine() {
    let rule = HeadingRule::new(
        "wiki",
        r"^(?P<marks>=+) (?P<title>.+?) =+$",
        LevelSpec::Computed(wiki_level),
        1,
    )
    .expect("rule");
    let chunker = HeadingChunker::with_engine(RuleEngine::with_rules(vec![rule]).expect("engine"));
    let result = chunker.chunk_document("= Top =\n== Sub ==\ntext", None).expect("chunking");

    assert_eq!(result.chunks.len(), 2);
    assert_eq!(result.chunks[1].level(), 2);
    assert_eq!(result.chunks[1].parent_id(), Some(result.chunks[0].id()));
    assert_eq!(result.chunks[1].clean_title(), "Sub");
}

#[test]
fn test_chunker_for_strategy() {
    let headings = chunker_for(ChunkingStrategy::Headings).expect("chunker");
    let structural = chunker_for(ChunkingStrategy::Structural).expect("chunker");
    assert!(!headings.supports_structural_graph());
    assert!(structural.supports_structural_graph());
}
