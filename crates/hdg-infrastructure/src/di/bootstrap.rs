//! Composition root
//!
//! Resolves the chunker and the enrichment collaborators named in the
//! configuration and wires them into a [`DocumentProcessingService`].
//!
//! ```text
//! AppConfig → chunker_for(strategy) ─┐
//!           → keyword registry   ────┼→ DocumentProcessingService
//!           → embedding registry ────┘
//! ```
//!
//! Providers are auto-registered via linkme distributed slices when
//! hdg-providers is linked; no explicit registration call is needed.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let document = context
//!     .process(&text, "README.md", &CancellationToken::new())
//!     .await?;
//! ```

use std::fmt;
use std::sync::Arc;

use hdg_application::domain_services::DocumentChunker;
use hdg_application::ports::providers::{EmbeddingProvider, KeywordExtractor};
use hdg_application::ports::registry::{resolve_embedding_provider, resolve_keyword_provider};
use hdg_application::use_cases::{DocumentProcessingService, ProcessedDocument};
use hdg_domain::error::{Error, Result};
use hdg_domain::value_objects::Embedding;
use hdg_providers::chunking::chunker_for;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::utils::TimedOperation;

/// Application context: configuration plus the wired processing service
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    chunker: Arc<dyn DocumentChunker>,
    keyword_extractor: Option<Arc<dyn KeywordExtractor>>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    service: Arc<DocumentProcessingService>,
}

impl AppContext {
    /// The processing service
    pub fn service(&self) -> Arc<DocumentProcessingService> {
        Arc::clone(&self.service)
    }

    /// The chunker selected by `chunking.strategy`
    pub fn chunker(&self) -> Arc<dyn DocumentChunker> {
        Arc::clone(&self.chunker)
    }

    /// The keyword extractor, when extraction is enabled
    pub fn keyword_extractor(&self) -> Option<Arc<dyn KeywordExtractor>> {
        self.keyword_extractor.clone()
    }

    /// The embedding provider, when embeddings are enabled
    pub fn embedding_provider(&self) -> Option<Arc<dyn EmbeddingProvider>> {
        self.embedding_provider.clone()
    }

    /// Process one document, logging the elapsed time
    pub async fn process(
        &self,
        text: &str,
        source_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ProcessedDocument> {
        let timer = TimedOperation::start();
        let document = self.service.process(text, source_id, cancel).await?;
        debug!(
            source_id,
            chunks = document.graph.chunks.len(),
            elapsed_ms = timer.elapsed_ms(),
            "Document pipeline finished"
        );
        Ok(document)
    }

    /// Vectorize a search query with the configured provider
    pub async fn embed_query(&self, query: &str) -> Result<Embedding> {
        self.service.embed_query(query).await
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("strategy", &self.chunker.strategy())
            .field(
                "keywords",
                &self.keyword_extractor.as_ref().map(|k| k.provider_name()),
            )
            .field(
                "embedding",
                &self.embedding_provider.as_ref().map(|e| e.provider_name()),
            )
            .finish_non_exhaustive()
    }
}

/// Initialize the application context from configuration
///
/// Collaborators are only resolved for the features the configuration
/// enables. Unknown provider names and invalid options fail here, before any
/// document is processed.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    info!(
        strategy = ?config.chunking.strategy,
        keywords = config.keywords.extract_keywords,
        embeddings = config.embedding.enabled,
        "Initializing application context"
    );

    let config = Arc::new(config);
    let chunker = chunker_for(config.chunking.strategy)?;

    let keyword_extractor = if config.keywords.extract_keywords {
        let extractor = resolve_keyword_provider(&config.keywords.provider_config())
            .map_err(Error::configuration)?;
        debug!(provider = extractor.provider_name(), "Resolved keyword extractor");
        Some(extractor)
    } else {
        None
    };

    let embedding_provider = if config.embedding.enabled {
        let provider = resolve_embedding_provider(&config.embedding.provider_config())
            .map_err(Error::configuration)?;
        debug!(
            provider = provider.provider_name(),
            dimensions = provider.dimensions(),
            "Resolved embedding provider"
        );
        Some(provider)
    } else {
        None
    };

    let mut builder = DocumentProcessingService::builder(Arc::clone(&chunker))
        .options(config.processing_options());
    if let Some(extractor) = &keyword_extractor {
        builder = builder.keyword_extractor(Arc::clone(extractor));
    }
    if let Some(provider) = &embedding_provider {
        builder = builder.embedding_provider(Arc::clone(provider));
    }
    let service = Arc::new(builder.build()?);

    info!("Application context initialized");
    Ok(AppContext {
        config,
        chunker,
        keyword_extractor,
        embedding_provider,
        service,
    })
}
