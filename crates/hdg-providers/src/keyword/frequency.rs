//! Term-frequency keyword extractor
//!
//! Tokenizes text into lowercase words, drops stop words, short tokens and
//! pure numbers, and ranks the rest by occurrence count. Ties keep the order
//! of first appearance, so the output is deterministic.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use hdg_application::ports::KeywordExtractor;
use hdg_application::ports::registry::{KEYWORD_PROVIDERS, KeywordProviderConfig, KeywordProviderEntry};
use hdg_domain::error::{Error, Result};
use regex::Regex;

use crate::constants::{KEYWORD_MIN_WORD_LENGTH, KEYWORD_STOP_WORDS};

const WORD_PATTERN: &str = r"[\p{L}\p{N}][\p{L}\p{N}_'-]*";

/// Keyword extractor ranking words by frequency
#[derive(Debug, Clone)]
pub struct FrequencyKeywordExtractor {
    word: Regex,
    min_word_length: usize,
}

impl FrequencyKeywordExtractor {
    /// Extractor with the default minimum word length
    pub fn new() -> Result<Self> {
        Self::with_min_word_length(KEYWORD_MIN_WORD_LENGTH)
    }

    /// Extractor ignoring tokens shorter than `min_word_length` characters
    pub fn with_min_word_length(min_word_length: usize) -> Result<Self> {
        let word = Regex::new(WORD_PATTERN)
            .map_err(|e| Error::keyword_with_source("Invalid word pattern", e))?;
        Ok(Self {
            word,
            min_word_length: min_word_length.max(1),
        })
    }

    /// Ranked keywords for `text`
    pub fn rank(&self, text: &str) -> Vec<String> {
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

        for (position, token) in self.word.find_iter(text).enumerate() {
            let word = token
                .as_str()
                .trim_end_matches(['\'', '-', '_'])
                .to_lowercase();
            if !self.is_candidate(&word) {
                continue;
            }
            counts.entry(word).or_insert((0, position)).0 += 1;
        }

        let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_b.cmp(count_a).then(first_a.cmp(first_b))
        });
        ranked.into_iter().map(|(word, _)| word).collect()
    }

    fn is_candidate(&self, word: &str) -> bool {
        word.chars().count() >= self.min_word_length
            && !word.chars().all(|c| c.is_numeric())
            && !KEYWORD_STOP_WORDS.contains(&word)
    }
}

#[async_trait]
impl KeywordExtractor for FrequencyKeywordExtractor {
    async fn extract_keywords(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.rank(text))
    }

    fn provider_name(&self) -> &str {
        "frequency"
    }
}

fn frequency_factory(
    config: &KeywordProviderConfig,
) -> std::result::Result<Arc<dyn KeywordExtractor>, String> {
    let min_word_length = config.min_word_length.unwrap_or(KEYWORD_MIN_WORD_LENGTH);
    FrequencyKeywordExtractor::with_min_word_length(min_word_length)
        .map(|extractor| Arc::new(extractor) as Arc<dyn KeywordExtractor>)
        .map_err(|e| e.to_string())
}

#[linkme::distributed_slice(KEYWORD_PROVIDERS)]
static FREQUENCY_KEYWORD_PROVIDER: KeywordProviderEntry = KeywordProviderEntry {
    name: "frequency",
    description: "Term-frequency keyword extractor with English stop words",
    factory: frequency_factory,
};
