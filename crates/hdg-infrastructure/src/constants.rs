//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `hdg_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "hdg.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "hdg";

/// Environment variable prefix for configuration
///
/// Nested keys are separated by a double underscore, e.g.
/// `HDG__CHUNKING__MAX_CHUNK_SIZE`.
pub const CONFIG_ENV_PREFIX: &str = "HDG";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// PROVIDER DEFAULTS
// ============================================================================

/// Keyword extractor resolved when none is configured
pub const DEFAULT_KEYWORD_PROVIDER: &str = "frequency";

/// Embedding provider resolved when none is configured
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "null";

/// Default embedding dimensions
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

/// Default minimum keyword candidate length
pub const DEFAULT_KEYWORD_MIN_WORD_LENGTH: usize = 3;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "HDG_LOG";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 7;

/// File name prefix used when the configured log path has no stem
pub const LOG_DEFAULT_FILE_PREFIX: &str = "hdg";
