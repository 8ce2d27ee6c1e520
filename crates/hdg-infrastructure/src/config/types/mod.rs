//! Configuration types
//!
//! | Type | Section |
//! |------|---------|
//! | [`AppConfig`] | root |
//! | [`ChunkingConfig`] | `[chunking]` |
//! | [`KeywordConfig`] | `[keywords]` |
//! | [`EmbeddingConfig`] | `[embedding]` |
//! | [`LoggingConfig`] | `[logging]` |

mod app;
mod chunking;
mod embedding;
mod keyword;
mod logging;

pub use app::AppConfig;
pub use chunking::ChunkingConfig;
pub use embedding::EmbeddingConfig;
pub use keyword::KeywordConfig;
pub use logging::LoggingConfig;
