//! Registry resolution with hdg-providers linked

use hdg_application::ports::registry::{
    EmbeddingProviderConfig, KeywordProviderConfig, list_embedding_providers,
    list_keyword_providers, resolve_embedding_provider, resolve_keyword_provider,
};

#[test]
fn test_linked_providers_are_listed() {
    assert!(list_embedding_providers().iter().any(|(name, _)| *name == "null"));
    let keyword_names: Vec<&str> = list_keyword_providers().into_iter().map(|(n, _)| n).collect();
    assert!(keyword_names.contains(&"frequency"));
    assert!(keyword_names.contains(&"null"));
}

#[test]
fn test_resolve_by_name() {
    let embedding = resolve_embedding_provider(&EmbeddingProviderConfig::new("null").with_dimensions(32))
        .expect("null embedding provider");
    assert_eq!(embedding.dimensions(), 32);

    let keywords = resolve_keyword_provider(&KeywordProviderConfig::new("null"))
        .expect("null keyword provider");
    assert_eq!(keywords.provider_name(), "null");
}

#[test]
fn test_unknown_names_list_alternatives() {
    let err = match resolve_embedding_provider(&EmbeddingProviderConfig::new("openai")) {
        Ok(_) => panic!("openai is not registered"),
        Err(e) => e,
    };
    assert!(err.contains("Unknown embedding provider 'openai'"));
    assert!(err.contains("null"));
}
