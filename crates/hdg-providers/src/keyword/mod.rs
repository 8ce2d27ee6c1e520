//! Keyword Extractor Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | NullKeywordExtractor | Always empty |
//! | FrequencyKeywordExtractor | Stop-word filtered term frequency |

pub mod frequency;
pub mod null;

pub use frequency::FrequencyKeywordExtractor;
pub use null::NullKeywordExtractor;
