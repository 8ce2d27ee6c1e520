//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in hdg-domain) and infrastructure constants.

// ============================================================================
// HEADING RULE CONSTANTS
// ============================================================================

/// Priority of the markdown level-1 rule; levels 2-6 follow consecutively
pub const PRIORITY_MARKDOWN_BASE: u32 = 10;

/// Priority of the numeric outline rule (`1.`, `1.2`, `1.2.3`)
pub const PRIORITY_NUMERIC_OUTLINE: u32 = 20;

/// Priority of the legal section rule (`§ 12`)
pub const PRIORITY_LEGAL_SECTION: u32 = 30;

/// Priority of the appendix/annex rule
pub const PRIORITY_APPENDIX: u32 = 40;

/// Priority of the roman numeral section rule (`IV. Title`)
pub const PRIORITY_ROMAN_SECTION: u32 = 50;

/// Priority of the single-letter section rule (`B. Title`)
pub const PRIORITY_LETTER_SECTION: u32 = 60;

/// Level assigned to legal sections
pub const LEVEL_LEGAL_SECTION: usize = 2;

/// Level assigned to appendices
pub const LEVEL_APPENDIX: usize = 1;

/// Level assigned to roman numeral sections
pub const LEVEL_ROMAN_SECTION: usize = 1;

/// Level assigned to single-letter sections
pub const LEVEL_LETTER_SECTION: usize = 2;

/// Deepest markdown ATX heading
pub const MAX_MARKDOWN_LEVEL: usize = 6;

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (matches common small embedding models)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Model name reported by the null embedding provider
pub const EMBEDDING_MODEL_NULL: &str = "null";

// ============================================================================
// KEYWORD PROVIDER CONSTANTS
// ============================================================================

/// Shortest token the frequency extractor considers
pub const KEYWORD_MIN_WORD_LENGTH: usize = 3;

/// Common English words never returned as keywords
pub const KEYWORD_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
    "his", "how", "if", "in", "into", "is", "it", "its", "itself", "just", "may", "more",
    "most", "must", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "out", "over", "own", "same", "shall", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "use",
    "used", "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "would", "you", "your", "yours",
];
