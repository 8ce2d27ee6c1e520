//! Keyword configuration types

use hdg_application::ports::registry::KeywordProviderConfig;
use hdg_domain::constants::DEFAULT_MAX_KEYWORDS_PER_CHUNK;
use hdg_domain::value_objects::{KeywordOptions, SectionKeywords};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_KEYWORD_MIN_WORD_LENGTH, DEFAULT_KEYWORD_PROVIDER};

/// Keyword enrichment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Call the keyword extractor for each chunk
    pub extract_keywords: bool,

    /// Cap applied to extracted keywords
    pub max_keywords_per_chunk: usize,

    /// Registered extractor name
    pub provider: String,

    /// Minimum candidate length passed to the extractor
    pub min_word_length: usize,

    /// Keywords added to every chunk
    pub custom_keywords: Vec<String>,

    /// Keywords added to chunks under matching sections
    pub section_keywords: Vec<SectionKeywords>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            extract_keywords: false,
            max_keywords_per_chunk: DEFAULT_MAX_KEYWORDS_PER_CHUNK,
            provider: DEFAULT_KEYWORD_PROVIDER.to_string(),
            min_word_length: DEFAULT_KEYWORD_MIN_WORD_LENGTH,
            custom_keywords: Vec::new(),
            section_keywords: Vec::new(),
        }
    }
}

impl KeywordConfig {
    /// Keyword options for the processing service
    pub fn keyword_options(&self) -> KeywordOptions {
        KeywordOptions {
            extract_keywords: self.extract_keywords,
            max_keywords_per_chunk: self.max_keywords_per_chunk,
            custom_keywords: self.custom_keywords.clone(),
            section_keywords: self.section_keywords.clone(),
        }
    }

    /// Registry lookup configuration for the extractor
    pub fn provider_config(&self) -> KeywordProviderConfig {
        KeywordProviderConfig::new(&self.provider).with_min_word_length(self.min_word_length)
    }
}
