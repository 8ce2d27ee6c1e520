//! Domain layer constants
//!
//! Contains constants that are part of the chunking domain logic and are
//! shared by the providers and the application layer. Infrastructure-specific
//! constants remain in `hdg_infrastructure::constants`.

// ============================================================================
// HIERARCHY CONSTANTS
// ============================================================================

/// Level of the synthetic root chunk seeded at the bottom of the context stack
pub const ROOT_LEVEL: usize = 0;

/// Chunk type of the synthetic root chunk
pub const ROOT_CHUNK_TYPE: &str = "root";

/// Chunk type assigned to fragments generated by constraint splitting
pub const SPLIT_CHUNK_TYPE: &str = "split";

/// Separator used when joining body text blocks and overlap prefixes
pub const CONTENT_SEPARATOR: &str = "\n\n";

/// Separator between ancestor titles in an enriched embedding prefix
pub const TITLE_PATH_SEPARATOR: &str = " > ";

// ============================================================================
// CONSTRAINT DEFAULTS
// ============================================================================

/// Default maximum chunk size in characters
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;

/// Default minimum chunk size in characters
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 100;

/// Default overlap in characters between consecutive chunks
pub const DEFAULT_CHUNK_OVERLAP: usize = 0;

// ============================================================================
// KEYWORD DEFAULTS
// ============================================================================

/// Default cap on the number of keywords attached to a chunk
pub const DEFAULT_MAX_KEYWORDS_PER_CHUNK: usize = 10;

/// Title suffix for the Nth fragment of a split chunk (N >= 2)
pub fn part_suffix(part: usize) -> String {
    format!(" (Part {part})")
}
