//! Configuration
//!
//! TOML configuration merged with `HDG__`-prefixed environment variables
//! through Figment, validated before use.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, ChunkingConfig, EmbeddingConfig, KeywordConfig, LoggingConfig};
