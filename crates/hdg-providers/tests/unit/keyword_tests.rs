//! Unit tests for keyword extractors

use hdg_application::ports::KeywordExtractor;
use hdg_application::ports::registry::{
    KeywordProviderConfig, list_keyword_providers, resolve_keyword_provider,
};
use hdg_providers::keyword::{FrequencyKeywordExtractor, NullKeywordExtractor};

#[tokio::test]
async fn test_frequency_ranking() {
    let extractor = FrequencyKeywordExtractor::new().expect("extractor");
    let keywords = extractor
        .extract_keywords("Rust rust cargo. Cargo crates rust")
        .await
        .expect("keywords");
    assert_eq!(keywords, vec!["rust", "cargo", "crates"]);
}

#[tokio::test]
async fn test_ties_keep_first_appearance() {
    let extractor = FrequencyKeywordExtractor::new().expect("extractor");
    let keywords = extractor
        .extract_keywords("zeta alpha mu")
        .await
        .expect("keywords");
    assert_eq!(keywords, vec!["zeta", "alpha"]);
}

#[test]
fn test_stop_words_short_tokens_and_numbers_are_dropped() {
    let extractor = FrequencyKeywordExtractor::new().expect("extractor");
    let keywords = extractor.rank("The parser and the lexer of it: 2024 is v1");
    assert_eq!(keywords, vec!["parser", "lexer"]);
}

#[test]
fn test_min_word_length() {
    let extractor = FrequencyKeywordExtractor::with_min_word_length(6).expect("extractor");
    assert_eq!(extractor.rank("graph nodes traversal"), vec!["traversal"]);
}

#[tokio::test]
async fn test_null_extractor_is_empty() {
    let keywords = NullKeywordExtractor::new()
        .extract_keywords("anything at all")
        .await
        .expect("keywords");
    assert!(keywords.is_empty());
}

#[test]
fn test_registry_entries() {
    let names: Vec<&str> = list_keyword_providers().into_iter().map(|(n, _)| n).collect();
    assert!(names.contains(&"null"));
    assert!(names.contains(&"frequency"));

    let extractor = resolve_keyword_provider(&KeywordProviderConfig::new("frequency"))
        .expect("frequency resolves");
    assert_eq!(extractor.provider_name(), "frequency");

    match resolve_keyword_provider(&KeywordProviderConfig::new("missing")) {
        Ok(_) => panic!("unknown provider must not resolve"),
        Err(e) => assert!(e.contains("Unknown keyword provider")),
    }
}
